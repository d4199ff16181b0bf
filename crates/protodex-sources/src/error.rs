//! Error types for protodex-sources

use std::path::PathBuf;

/// Result type for protodex-sources operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading ground-truth sources
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("source not found: {path}")]
    NotFound { path: PathBuf },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config key missing: [{section}] {key}")]
    MissingKey { section: String, key: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }
}
