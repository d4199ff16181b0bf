//! JSON document loading

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::{Error, Result};

/// Load and deserialize a JSON document.
///
/// A missing file maps to [`Error::NotFound`] and malformed JSON to
/// [`Error::Parse`]; the caller decides whether either is fatal for its
/// check.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::NotFound {
            path: path.to_path_buf(),
        },
        _ => Error::io(path, e),
    })?;
    serde_json::from_str(&content).map_err(|e| Error::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a per-category index document from the database directory.
///
/// Returns `Ok(None)` when the document has not been generated yet; parse
/// failures still surface as errors.
pub fn load_optional<T: DeserializeOwned>(db_dir: &Path, name: &str) -> Result<Option<T>> {
    let path = db_dir.join(name);
    match load_json(&path) {
        Ok(doc) => Ok(Some(doc)),
        Err(Error::NotFound { .. }) => {
            tracing::debug!(path = %path.display(), "index document not generated yet");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
