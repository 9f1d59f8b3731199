//! Per-entry classification.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::entry::PathEntry;
use crate::fs::{EntryProbe, FsProvider};

/// Outcome of checking one search-path entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum Classification {
    /// Existing directory with at least one executable file directly inside.
    Valid,
    Missing,
    NotADirectory,
    EmptyOrNoExecutables,
    /// The entry exists but its metadata or listing could not be read.
    Unreadable(String),
}

impl Classification {
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid => write!(f, "is a directory with executable files"),
            Self::Missing => write!(f, "does not exist"),
            Self::NotADirectory => write!(f, "is a file, not a directory"),
            Self::EmptyOrNoExecutables => {
                write!(f, "is a directory, but has no executable files")
            }
            Self::Unreadable(reason) => {
                write!(f, "exists, but could not be read: {reason}")
            }
        }
    }
}

/// Classify one entry.
///
/// Checks run in order: existence, directory-ness, then a scan of the
/// immediate children that stops at the first executable non-directory.
/// Read-only, so repeating it on an unchanged filesystem gives the same answer.
pub fn classify_entry(entry: &PathEntry, fs: &dyn FsProvider) -> Classification {
    let path = entry.as_path();

    let classification = match fs.probe(path) {
        EntryProbe::Missing => Classification::Missing,
        EntryProbe::File => Classification::NotADirectory,
        EntryProbe::Inaccessible(reason) => Classification::Unreadable(reason),
        EntryProbe::Directory => match fs.read_dir(path) {
            Ok(mut children) => {
                if children.any(|child| fs.is_executable(&child)) {
                    Classification::Valid
                } else {
                    Classification::EmptyOrNoExecutables
                }
            }
            Err(e) => Classification::Unreadable(e.to_string()),
        },
    };

    debug!(
        index = entry.index,
        entry = %entry.raw,
        ?classification,
        "classified search path entry"
    );
    classification
}
