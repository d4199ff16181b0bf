//! Two-way set difference between an index and its ground truth

use std::collections::BTreeSet;

/// Result of comparing indexed identifiers against the authoritative set.
///
/// The two sides are disjoint by construction, and together with the
/// intersection of the inputs they partition the union of the inputs.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GroundTruthDiff<T: Ord> {
    /// Present on disk (or in the source file) but absent from the index.
    pub missing_from_index: BTreeSet<T>,
    /// Present in the index but no longer backed by the source.
    pub extra_in_index: BTreeSet<T>,
}

impl<T: Ord> GroundTruthDiff<T> {
    pub fn is_clean(&self) -> bool {
        self.missing_from_index.is_empty() && self.extra_in_index.is_empty()
    }
}

/// Pure set difference in both directions; inputs are untouched.
pub fn diff_sets<T: Ord + Clone>(
    indexed: &BTreeSet<T>,
    actual: &BTreeSet<T>,
) -> GroundTruthDiff<T> {
    GroundTruthDiff {
        missing_from_index: actual.difference(indexed).cloned().collect(),
        extra_in_index: indexed.difference(actual).cloned().collect(),
    }
}
