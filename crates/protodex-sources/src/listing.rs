//! `.lst` listing files: one entry per line

use std::fs;
use std::path::Path;

use crate::{Error, Result};

/// Read a listing file, skipping blank lines and `#` comments.
///
/// Entry order follows the file; the proto loader assigns PIDs by line
/// position, so callers that only need a count still get the right one.
pub fn read_listing(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    Ok(parse_listing(&content))
}

/// Parse listing text into its entries.
pub fn parse_listing(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(str::to_string)
        .collect()
}
