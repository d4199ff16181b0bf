//! Consistency checks and report generation for protodex
//!
//! Pure check logic over immutable document snapshots: missing-attribute
//! and duplicate-PID scans, two-way ground-truth diffs, the cross-reference
//! scan, and the textual report. I/O stays in the model and sources crates;
//! everything here is deterministic given its inputs.

pub mod crossref;
pub mod diff;
pub mod issue;
pub mod report;
pub mod validate;

pub use crossref::{CrossRefOutcome, cross_reference};
pub use diff::{GroundTruthDiff, diff_sets};
pub use issue::{Issue, IssueKind, IssueLog};
pub use report::{PREVIEW_LIMIT, render_report};
pub use validate::{IndexStats, IndexValidator, duplicate_identifiers, missing_attribute};
