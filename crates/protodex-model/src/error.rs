//! Error types for protodex-model

use std::path::PathBuf;

/// Result type for protodex-model operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading index documents
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("index document not found: {path}")]
    NotFound { path: PathBuf },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
