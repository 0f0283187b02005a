//! Error types for conversion orchestration.

use std::path::PathBuf;

use thiserror::Error;

use garb_formats::Format;

/// Errors that can occur while converting an outfit file.
#[derive(Debug, Error)]
pub enum Error {
    /// The detector could not classify the input.
    #[error("unrecognized outfit format: {}", path.display())]
    UnsupportedFormat { path: PathBuf },

    /// The input matched a format's shape but could not be decoded.
    #[error("failed to decode {format} input: {source}")]
    Decode {
        format: Format,
        source: garb_formats::Error,
    },

    /// Encoding a well-formed outfit failed; indicates an internal bug.
    #[error("failed to encode {format} output: {source}")]
    Encode {
        format: Format,
        source: garb_formats::Error,
    },

    /// Read/write failure on the underlying storage.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;
