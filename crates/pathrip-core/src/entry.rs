//! Search-path entries and splitting.

use std::path::Path;

use serde::Serialize;

use crate::platform::PathSeparator;

/// One directory string taken from the search path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathEntry {
    /// Position in the split sequence. Output order follows it.
    pub index: usize,
    /// Entry text exactly as it appeared, untrimmed.
    pub raw: String,
}

impl PathEntry {
    pub fn new(index: usize, raw: impl Into<String>) -> Self {
        Self {
            index,
            raw: raw.into(),
        }
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.raw)
    }
}

/// Split a raw search path into ordered entries.
///
/// A run of separators acts as one delimiter and trailing separators produce
/// nothing. Leading separators produce a single empty first entry, which is
/// then reported like any other missing directory. An empty input, or one
/// made only of separators, gives an empty vector.
pub fn split_path(raw: &str, separator: PathSeparator) -> Vec<PathEntry> {
    let trimmed = raw.trim_end_matches(separator.as_char());
    if trimmed.is_empty() {
        return Vec::new();
    }

    let mut segments = trimmed.split(separator.as_char());
    let first = segments.next();
    first
        .into_iter()
        .chain(segments.filter(|segment| !segment.is_empty()))
        .enumerate()
        .map(|(index, segment)| PathEntry::new(index, segment))
        .collect()
}
