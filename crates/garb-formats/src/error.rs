//! Error types for format codecs.

use thiserror::Error;

/// Errors that can occur when decoding or encoding an outfit file.
#[derive(Debug, Error)]
pub enum Error {
    /// JSON parse or serialize error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Text-format input that is not valid UTF-8.
    #[error("input is not valid UTF-8 text")]
    NotUtf8,
}

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, Error>;
