//! Evaluation results and their text rendering.

use std::fmt;

use serde::Serialize;

use crate::classify::Classification;
use crate::entry::PathEntry;
use crate::evaluator::PlatformHint;
use crate::platform::{PathSeparator, Platform};

/// One entry together with its classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryReport {
    #[serde(flatten)]
    pub entry: PathEntry,
    pub classification: Classification,
}

impl EntryReport {
    /// `Entry [/usr/local/sbin] does not exist`
    pub fn diagnostic_line(&self) -> String {
        format!("Entry [{}] {}", self.entry.raw, self.classification)
    }
}

/// Everything a completed evaluation produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluationReport {
    pub hint: PlatformHint,
    pub platform: Platform,
    pub separator: PathSeparator,
    /// The search path exactly as read.
    pub original: String,
    /// Entries in split order.
    pub entries: Vec<EntryReport>,
    /// Valid entries rejoined with `separator`.
    pub recommended: String,
}

impl EvaluationReport {
    /// Entries that were left out of the recommendation.
    pub fn diagnostics(&self) -> impl Iterator<Item = &EntryReport> {
        self.entries
            .iter()
            .filter(|report| !report.classification.is_valid())
    }

    pub fn valid_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|report| report.classification.is_valid())
            .count()
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics().next().is_none()
    }
}

/// Plain-text report: one line per rejected entry, then the old and new
/// path as labelled blocks. No trailing newline.
impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for report in self.diagnostics() {
            writeln!(f, "{}", report.diagnostic_line())?;
        }
        writeln!(f, "Old PATH")?;
        writeln!(f, "{}", self.original)?;
        writeln!(f)?;
        writeln!(f, "New PATH")?;
        write!(f, "{}", self.recommended)
    }
}
