//! Identifier recovery from `.msg` dialogue files
//!
//! MSG files interleave text with `{id}{flags}text` entries. Each record
//! type owns a hundred-wide id band, so the canonical PID is the raw id
//! divided by 100: `{101}{0}Hello` and `{199}{0}World` both belong to PID 1.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::{Error, Result};

static MSG_ENTRY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{(\d+)\}\{(\d+)\}").unwrap());

/// Canonical PIDs present in MSG text.
pub fn msg_pids(content: &str) -> BTreeSet<i64> {
    MSG_ENTRY
        .captures_iter(content)
        .filter_map(|c| c[1].parse::<i64>().ok())
        .map(|raw| raw / 100)
        .collect()
}

/// Read a MSG file and recover its canonical PIDs.
pub fn read_msg_pids(path: &Path) -> Result<BTreeSet<i64>> {
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    Ok(msg_pids(&content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_msg_pids_hundred_band() {
        let pids = msg_pids("{101}{0}Hello\n{199}{0}World\n");
        assert_eq!(pids, BTreeSet::from([1]));
    }

    #[test]
    fn test_msg_pids_multiple_records() {
        let pids = msg_pids("{100}{0}A\n{250}{0}B\nplain prose\n{9901}{1}C\n");
        assert_eq!(pids, BTreeSet::from([1, 2, 99]));
    }

    #[test]
    fn test_msg_pids_ignores_malformed_entries() {
        let pids = msg_pids("{oops}{0}A\n{12}\n{}{}{}\n");
        assert!(pids.is_empty());
    }
}
