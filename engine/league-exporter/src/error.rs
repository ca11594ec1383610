//! Error types for the exporter

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for export operations
pub type Result<T> = std::result::Result<T, ExportError>;

/// Fatal export errors. Anything recoverable is handled in the assembler.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Output directory or file could not be created or written
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ExportError {
    /// Create a new I/O error for `path`
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}
