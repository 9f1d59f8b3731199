//! Rebuilding the search path from valid entries.

use crate::classify::Classification;
use crate::entry::PathEntry;
use crate::platform::PathSeparator;

/// Join the raw text of every `Valid` entry, in original order.
///
/// `entries` and `classifications` are parallel slices. Nothing is
/// normalised or deduplicated: a valid entry listed twice is kept twice.
pub fn build_recommendation(
    entries: &[PathEntry],
    classifications: &[Classification],
    separator: PathSeparator,
) -> String {
    debug_assert_eq!(entries.len(), classifications.len());

    entries
        .iter()
        .zip(classifications)
        .filter(|(_, classification)| classification.is_valid())
        .map(|(entry, _)| entry.raw.as_str())
        .collect::<Vec<_>>()
        .join(separator.as_str())
}
