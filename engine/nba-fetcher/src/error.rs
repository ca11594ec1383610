//! Error types for the source adapters

use thiserror::Error;

/// Result type alias for fetch operations
pub type Result<T> = std::result::Result<T, FetchError>;

/// Errors that can occur while talking to an external provider
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport errors (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider answered with a non-success status
    #[error("Request to {url} failed with status {status}")]
    Status { status: u16, url: String },

    /// Response body was not the JSON we expected
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Stats response did not contain the named result set
    #[error("Missing result set: {0}")]
    MissingResultSet(String),

    /// Result set was present but had no rows
    #[error("Empty result: {0}")]
    EmptyResult(String),

    /// A CSS selector failed to compile
    #[error("Invalid selector: {0}")]
    Selector(String),
}

impl FetchError {
    /// Create a new missing result set error
    pub fn missing_result_set(name: impl Into<String>) -> Self {
        Self::MissingResultSet(name.into())
    }

    /// Create a new empty result error
    pub fn empty_result(msg: impl Into<String>) -> Self {
        Self::EmptyResult(msg.into())
    }
}
