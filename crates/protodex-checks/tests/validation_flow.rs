//! End-to-end validation flow over an index document written to disk.

use std::fs;

use tempfile::TempDir;

use protodex_checks::{IndexStats, IndexValidator, IssueKind, render_report};
use protodex_model::{IndexDocument, load_json};

const SAMPLE_INDEX: &str = r#"{
  "creatures": {
    "7": {"name": "Rat", "file": "pid_7.fopro"},
    "12": {"file": "pid_12.fopro"}
  },
  "items": {
    "7": {"name": "Knife"},
    "40": {"name": "Stimpak"}
  },
  "objects": {
    "100": {"hasName": true, "hasDescription": true},
    "101": {"hasName": false, "hasDescription": false}
  },
  "maps": {
    "den": {"source": "den.fomap", "data": "..."}
  },
  "defines": {
    "PID_RAT": "7",
    "PID_KNIFE": "40"
  },
  "references": {
    "missingNames": ["art\\items\\gone.frm"],
    "missingDescriptions": []
  }
}"#;

#[test]
fn test_load_validate_report_round() {
    let temp = TempDir::new().unwrap();
    let index_path = temp.path().join("index.json");
    fs::write(&index_path, SAMPLE_INDEX).unwrap();

    let doc: IndexDocument = load_json(&index_path).unwrap();
    let stats = IndexStats::of(&doc);
    let log = IndexValidator::new(&doc).run();

    // creature 12 has no name; creature/item share PID 7; object 101 is
    // incomplete; one orphaned reference comes from the indexer itself.
    assert_eq!(log.count(IssueKind::MissingCreature), 1);
    assert_eq!(log.count(IssueKind::DuplicatePid), 1);
    assert_eq!(log.count(IssueKind::IncompleteObject), 1);
    assert_eq!(log.count(IssueKind::OrphanedReference), 1);
    assert_eq!(log.total(), 4);

    let report = render_report(&log, &stats);
    assert!(report.contains("Total Issues Found: 4"));
    assert!(report.contains("DUPLICATE PIDS (1):"));
    assert!(report.contains("item \"Knife\" duplicates creature \"Rat\""));
    assert!(report.contains("Object Completion: 50.0%"));
}

#[test]
fn test_clean_index_yields_empty_log() {
    let doc: IndexDocument = serde_json::from_str(
        r#"{
          "creatures": {"1": {"name": "Dog"}},
          "items": {"2": {"name": "Rope"}},
          "objects": {"3": {"hasName": 1, "hasDescription": 1}},
          "maps": {"hub": {"data": "..."}},
          "defines": {"PID_DOG": "1", "PID_ROPE": "2"}
        }"#,
    )
    .unwrap();

    let log = IndexValidator::new(&doc).run();
    assert!(log.is_empty());

    let report = render_report(&log, &IndexStats::of(&doc));
    assert!(report.contains("Total Issues Found: 0"));
    assert!(report.contains("Object Completion: 100.0%"));
}
