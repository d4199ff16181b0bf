//! Issue model: data-quality findings accumulated per kind
//!
//! Issues are recorded in discovery order and never deduplicated; the same
//! defect reported twice by two checks is two findings. Reporting truncates
//! the listing, not the counts.

use std::collections::BTreeMap;

/// The kinds of finding a validation run can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IssueKind {
    MissingCreature,
    MissingItem,
    MissingObject,
    MissingMap,
    MissingDefine,
    DuplicatePid,
    OrphanedReference,
    IncompleteObject,
    UnreferencedDefine,
}

impl IssueKind {
    /// All kinds, in report order.
    pub const ALL: [IssueKind; 9] = [
        IssueKind::MissingCreature,
        IssueKind::MissingItem,
        IssueKind::MissingObject,
        IssueKind::MissingMap,
        IssueKind::MissingDefine,
        IssueKind::DuplicatePid,
        IssueKind::OrphanedReference,
        IssueKind::IncompleteObject,
        IssueKind::UnreferencedDefine,
    ];

    /// Category heading used in the report.
    pub fn label(self) -> &'static str {
        match self {
            IssueKind::MissingCreature => "MISSING CREATURES",
            IssueKind::MissingItem => "MISSING ITEMS",
            IssueKind::MissingObject => "MISSING OBJECTS",
            IssueKind::MissingMap => "MISSING MAPS",
            IssueKind::MissingDefine => "MISSING DEFINES",
            IssueKind::DuplicatePid => "DUPLICATE PIDS",
            IssueKind::OrphanedReference => "ORPHANED REFERENCES",
            IssueKind::IncompleteObject => "INCOMPLETE OBJECTS",
            IssueKind::UnreferencedDefine => "UNREFERENCED DEFINES",
        }
    }
}

/// A single finding: the offending identifier plus readable context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub pid: Option<String>,
    pub detail: String,
}

impl Issue {
    pub fn new(pid: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            pid: Some(pid.into()),
            detail: detail.into(),
        }
    }

    /// A finding with no single offending identifier.
    pub fn detail_only(detail: impl Into<String>) -> Self {
        Self {
            pid: None,
            detail: detail.into(),
        }
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.pid {
            Some(pid) => write!(f, "PID {}: {}", pid, self.detail),
            None => write!(f, "{}", self.detail),
        }
    }
}

/// Accumulator mapping each kind to its findings, in discovery order.
#[derive(Debug, Default)]
pub struct IssueLog {
    issues: BTreeMap<IssueKind, Vec<Issue>>,
}

impl IssueLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: IssueKind, issue: Issue) {
        self.issues.entry(kind).or_default().push(issue);
    }

    pub fn extend(&mut self, kind: IssueKind, issues: impl IntoIterator<Item = Issue>) {
        self.issues.entry(kind).or_default().extend(issues);
    }

    /// Findings of one kind, in discovery order.
    pub fn of(&self, kind: IssueKind) -> &[Issue] {
        self.issues.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn count(&self, kind: IssueKind) -> usize {
        self.of(kind).len()
    }

    pub fn total(&self) -> usize {
        self.issues.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_keeps_discovery_order() {
        let mut log = IssueLog::new();
        log.push(IssueKind::DuplicatePid, Issue::new("9", "first"));
        log.push(IssueKind::DuplicatePid, Issue::new("2", "second"));
        let details: Vec<&str> = log
            .of(IssueKind::DuplicatePid)
            .iter()
            .map(|i| i.detail.as_str())
            .collect();
        assert_eq!(details, vec!["first", "second"]);
    }

    #[test]
    fn test_log_never_deduplicates() {
        let mut log = IssueLog::new();
        let issue = Issue::new("7", "no name");
        log.push(IssueKind::MissingItem, issue.clone());
        log.push(IssueKind::MissingItem, issue);
        assert_eq!(log.count(IssueKind::MissingItem), 2);
        assert_eq!(log.total(), 2);
    }

    #[test]
    fn test_issue_display() {
        assert_eq!(
            Issue::new("7", "no name").to_string(),
            "PID 7: no name"
        );
        assert_eq!(Issue::detail_only("stale entry").to_string(), "stale entry");
    }
}
