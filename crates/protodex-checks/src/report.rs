//! Validation report rendering
//!
//! The report is a pure function of the accumulated findings and dataset
//! sizes, so two runs over the same inputs produce byte-identical text.
//! Listings are truncated to a fixed preview length; counts stay exact.

use std::fmt::Write;

use crate::issue::{IssueKind, IssueLog};
use crate::validate::IndexStats;

/// How many example findings each category lists before truncating.
pub const PREVIEW_LIMIT: usize = 10;

const BANNER: &str = "============================================================";

/// Render the full textual report.
pub fn render_report(log: &IssueLog, stats: &IndexStats) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{BANNER}");
    let _ = writeln!(out, "INDEX VALIDATION REPORT");
    let _ = writeln!(out, "{BANNER}");
    let _ = writeln!(out);
    let _ = writeln!(out, "Total Issues Found: {}", log.total());

    for kind in IssueKind::ALL {
        let issues = log.of(kind);
        if issues.is_empty() {
            continue;
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "{} ({}):", kind.label(), issues.len());
        for issue in issues.iter().take(PREVIEW_LIMIT) {
            let _ = writeln!(out, "  - {issue}");
        }
        if issues.len() > PREVIEW_LIMIT {
            let _ = writeln!(out, "  ... and {} more", issues.len() - PREVIEW_LIMIT);
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{BANNER}");
    let _ = writeln!(out, "STATISTICS");
    let _ = writeln!(out, "{BANNER}");
    let _ = writeln!(out, "Creatures: {}", stats.creatures);
    let _ = writeln!(out, "Items: {}", stats.items);
    let _ = writeln!(out, "Objects: {}", stats.objects);
    let _ = writeln!(out, "Maps: {}", stats.maps);
    let _ = writeln!(out, "Defines: {}", stats.defines);
    let _ = writeln!(out);
    let _ = writeln!(out, "Object Completion: {:.1}%", stats.completion_percent());
    let _ = writeln!(
        out,
        "Complete Objects: {}/{}",
        stats.complete_objects, stats.objects
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue::Issue;

    fn stats() -> IndexStats {
        IndexStats {
            creatures: 2,
            items: 3,
            objects: 4,
            maps: 1,
            defines: 5,
            complete_objects: 2,
        }
    }

    #[test]
    fn test_report_counts_and_header() {
        let mut log = IssueLog::new();
        log.push(IssueKind::MissingItem, Issue::new("2", "no name (file: unknown)"));

        let report = render_report(&log, &stats());
        assert!(report.contains("INDEX VALIDATION REPORT"));
        assert!(report.contains("Total Issues Found: 1"));
        assert!(report.contains("MISSING ITEMS (1):"));
        assert!(report.contains("  - PID 2: no name (file: unknown)"));
        assert!(report.contains("Object Completion: 50.0%"));
        assert!(report.contains("Complete Objects: 2/4"));
    }

    #[test]
    fn test_report_truncates_preview_but_not_count() {
        let mut log = IssueLog::new();
        for i in 0..25 {
            log.push(IssueKind::MissingMap, Issue::new(i.to_string(), "no data"));
        }

        let report = render_report(&log, &stats());
        assert!(report.contains("MISSING MAPS (25):"));
        assert!(report.contains("  ... and 15 more"));
        assert_eq!(report.matches("no data").count(), PREVIEW_LIMIT);
    }

    #[test]
    fn test_report_is_deterministic() {
        let mut log = IssueLog::new();
        log.push(IssueKind::DuplicatePid, Issue::new("7", "x"));
        assert_eq!(render_report(&log, &stats()), render_report(&log, &stats()));
    }

    #[test]
    fn test_report_empty_log_skips_categories() {
        let report = render_report(&IssueLog::new(), &stats());
        assert!(report.contains("Total Issues Found: 0"));
        assert!(!report.contains("MISSING"));
    }
}
