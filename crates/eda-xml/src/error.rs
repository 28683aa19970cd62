//! Error types for XML serialization.

use thiserror::Error;

/// Errors that can occur while serializing a document.
#[derive(Debug, Error)]
pub enum XmlError {
    /// Writing to the sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialized bytes were not valid UTF-8.
    #[error("serialized XML is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Result type alias for XML operations.
pub type Result<T> = std::result::Result<T, XmlError>;
