//! CLI-specific error types and exit codes.
//!
//! An unknown platform is not a `CliError`: the run reports it and exits 0.

use thiserror::Error;

/// Failures outside the evaluation itself.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid flag or environment configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Writing the report failed (closed pipe, full disk, ...).
    #[error("IO error: {0}")]
    Io(String),

    /// The report could not be encoded as JSON.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CliError {
    /// Map error to an exit code following sysexits.h.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 78,        // EX_CONFIG
            Self::Io(_) => 74,            // EX_IOERR
            Self::Serialization(_) => 70, // EX_SOFTWARE
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Self::Io(err.to_string())
        } else {
            Self::Serialization(err.to_string())
        }
    }
}
