//! Command-line definition.

use clap::{Parser, ValueEnum};

use pathrip_core::{DEFAULT_PATH_VAR, EvaluatorConfig};

/// How the evaluation report is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Diagnostics followed by the old and new path
    Text,
    /// The full report as pretty-printed JSON
    Json,
}

/// Check every entry of the executable search path and suggest a cleaned-up one.
#[derive(Debug, Parser)]
#[command(name = "pathrip")]
#[command(about = "Find dead entries in PATH and suggest a replacement")]
#[command(version = pathrip_build_info::LONG_VERSION)]
pub struct Cli {
    /// Evaluate this search path instead of reading it from the environment
    #[arg(long, env = "PATHRIP_PATH", value_name = "RAW")]
    pub path: Option<String>,

    /// Platform hint to use instead of $OSTYPE / $OS (e.g. linux-gnu, darwin23, Windows_NT)
    #[arg(long = "os-type", env = "PATHRIP_OS_TYPE", value_name = "HINT")]
    pub os_type: Option<String>,

    /// Environment variable holding the search path
    #[arg(long = "path-var", value_name = "NAME", default_value = DEFAULT_PATH_VAR)]
    pub path_var: String,

    /// Output format
    #[arg(long, value_enum, env = "PATHRIP_FORMAT", default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Cli {
    pub fn evaluator_config(&self) -> EvaluatorConfig {
        EvaluatorConfig::default().with_path_var(self.path_var.clone())
    }
}
