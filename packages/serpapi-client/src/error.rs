//! Error types for the SerpApi client.

use thiserror::Error;

/// Result type for SerpApi client operations.
pub type Result<T> = std::result::Result<T, SerpApiError>;

/// SerpApi client errors.
#[derive(Debug, Error)]
pub enum SerpApiError {
    /// Network error (connection failed, timeout, body read failed)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// 2xx response carrying an `error` field (bad key, exhausted quota, no results)
    #[error("provider error: {0}")]
    Provider(String),

    /// Body was not valid JSON
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
