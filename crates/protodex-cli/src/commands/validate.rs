//! `validate` command: internal-consistency pass over one index document

use std::fs;
use std::path::Path;

use colored::Colorize;

use protodex_checks::{IndexStats, IndexValidator, IssueKind, render_report};
use protodex_model::{IndexDocument, load_json};

use crate::error::Result;

/// Run the validate command. Returns whether the index came up clean.
pub fn run_validate(index_path: &Path, report_path: &Path) -> Result<bool> {
    // A missing or malformed index makes every other check meaningless,
    // so this load is the one fatal step.
    let doc: IndexDocument = load_json(index_path)?;
    println!("Loaded index from {}", index_path.display());

    let stats = IndexStats::of(&doc);
    let log = IndexValidator::new(&doc).run();

    print_category("creatures", stats.creatures, log.count(IssueKind::MissingCreature));
    print_category("items", stats.items, log.count(IssueKind::MissingItem));
    print_category("objects", stats.objects, log.count(IssueKind::IncompleteObject));
    print_category("maps", stats.maps, log.count(IssueKind::MissingMap));
    print_category("defines", stats.defines, log.count(IssueKind::DuplicatePid));
    println!(
        "Checked references... {} orphaned",
        log.count(IssueKind::OrphanedReference)
    );

    let report = render_report(&log, &stats);
    fs::write(report_path, &report)?;
    println!("Report saved to {}", report_path.display());

    let total = log.total();
    if total == 0 {
        println!("{}", "Validation passed, no issues found.".green());
    } else {
        println!(
            "{}",
            format!("Validation completed with {total} issues.").yellow()
        );
    }
    Ok(total == 0)
}

fn print_category(name: &str, records: usize, issues: usize) {
    println!("Validating {name}... {records} records, {issues} issues");
}
