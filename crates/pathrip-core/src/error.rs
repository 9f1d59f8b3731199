//! Evaluation error types.

use thiserror::Error;

/// Errors that stop an evaluation before any entry is processed.
///
/// Per-entry problems are not errors; they are reported as
/// [`Classification`](crate::Classification) values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The platform hint is absent or not one we know how to delimit.
    #[error("Can't determine HOST OS type{}", unknown_platform_detail(.hint.as_deref()))]
    UnknownPlatform {
        /// The hint value that was rejected, `None` when no hint was set.
        hint: Option<String>,
    },
}

impl EvalError {
    /// An empty hint is recorded as no hint.
    pub fn unknown_platform(hint: Option<&str>) -> Self {
        Self::UnknownPlatform {
            hint: hint.filter(|value| !value.is_empty()).map(str::to_owned),
        }
    }
}

fn unknown_platform_detail(hint: Option<&str>) -> String {
    match hint {
        Some(value) => format!(" (unrecognised hint \"{value}\")."),
        None => ".".to_string(),
    }
}
