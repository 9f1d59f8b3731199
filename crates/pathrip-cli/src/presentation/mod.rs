//! Rendering evaluation results to a writer.

use std::io::Write;

use pathrip_core::{EvalError, EvaluationReport};

use crate::error::CliError;
use crate::parser::OutputFormat;

/// Write a completed report in the requested format, newline-terminated.
pub fn write_report(
    report: &EvaluationReport,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => writeln!(out, "{report}")?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// The diagnostic for a run that could not start: one text line, or a JSON
/// object with an `error` field.
pub fn write_evaluation_error(
    err: &EvalError,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => writeln!(out, "{err}")?,
        OutputFormat::Json => {
            let EvalError::UnknownPlatform { hint } = err;
            let body = serde_json::json!({ "error": err.to_string(), "hint": hint });
            serde_json::to_writer_pretty(&mut *out, &body)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
