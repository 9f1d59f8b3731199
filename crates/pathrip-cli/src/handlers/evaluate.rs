//! The evaluate command: read inputs, run the evaluator, print the result.

use std::io::Write;

use tracing::{debug, warn};

use pathrip_core::{
    EnvProvider, EvaluationInput, FsProvider, HintSource, PathEvaluator, PlatformHint,
    gather_inputs,
};

use crate::error::CliError;
use crate::parser::Cli;
use crate::presentation::{write_evaluation_error, write_report};

/// How a run ended. Both variants exit 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluateOutcome {
    /// A report was printed; `rejected` entries were left out.
    Reported { kept: usize, rejected: usize },
    /// The platform could not be determined; only a diagnostic was printed.
    UnknownPlatform,
}

/// Build the evaluation input from the environment plus CLI overrides.
pub fn resolve_input(cli: &Cli, env: &dyn EnvProvider) -> Result<EvaluationInput, CliError> {
    if cli.path_var.trim().is_empty() {
        return Err(CliError::Config("--path-var cannot be empty".to_string()));
    }

    let mut input = gather_inputs(env, &cli.evaluator_config());

    if let Some(raw) = &cli.path {
        debug!("using search path from --path");
        input.raw_path.clone_from(raw);
    }
    if let Some(hint) = cli.os_type.as_deref().filter(|hint| !hint.is_empty()) {
        debug!(hint, "using platform hint from --os-type");
        input.hint = Some(PlatformHint::new(hint, HintSource::Override));
    }

    Ok(input)
}

/// Execute the evaluate command, writing the report to `out`.
///
/// An unknown platform is reported on `out` in the chosen format and is not
/// an error.
pub fn execute(
    cli: &Cli,
    env: &dyn EnvProvider,
    fs: &dyn FsProvider,
    out: &mut dyn Write,
) -> Result<EvaluateOutcome, CliError> {
    let input = resolve_input(cli, env)?;

    match PathEvaluator::new(fs).evaluate(&input) {
        Ok(report) => {
            write_report(&report, cli.format, out)?;
            let kept = report.valid_count();
            Ok(EvaluateOutcome::Reported {
                kept,
                rejected: report.entries.len() - kept,
            })
        }
        Err(err) => {
            warn!(error = %err, "evaluation aborted");
            write_evaluation_error(&err, cli.format, out)?;
            Ok(EvaluateOutcome::UnknownPlatform)
        }
    }
}
