//! Directory scans filtered by file extension

use std::collections::BTreeSet;
use std::path::Path;

use crate::{Error, Result};

/// Collect file names under `dir` whose extension matches one of
/// `extensions` (compared case-insensitively, without the leading dot).
///
/// Subdirectories are not descended into; the art and proto directories the
/// checker cares about are flat.
pub fn scan_extensions(dir: &Path, extensions: &[&str]) -> Result<BTreeSet<String>> {
    let mut names = BTreeSet::new();
    let entries = std::fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

    for entry in entries {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let matches = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .is_some_and(|ext| extensions.contains(&ext.as_str()));
        if matches {
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                names.insert(name.to_string());
            }
        }
    }

    tracing::debug!(dir = %dir.display(), count = names.len(), "scanned directory");
    Ok(names)
}
