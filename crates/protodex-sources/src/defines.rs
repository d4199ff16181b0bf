//! `#define` extraction from script source files

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::{Error, Result};

static DEFINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^#define\s+(\w+)").unwrap());

/// Names declared with `#define` at the start of a line.
pub fn define_names(content: &str) -> BTreeSet<String> {
    DEFINE
        .captures_iter(content)
        .map(|c| c[1].to_string())
        .collect()
}

/// Read a script file and extract its define names.
pub fn read_define_names(path: &Path) -> Result<BTreeSet<String>> {
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    Ok(define_names(&content))
}
