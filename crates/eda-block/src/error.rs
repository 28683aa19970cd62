//! Error types for fixed-block container operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when reading or writing `.eda` containers.
#[derive(Debug, Error)]
pub enum BlockError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// A line is not exactly one block wide.
    #[error("line {line} has {length} characters, expected {expected}")]
    InvalidLineLength {
        line: usize,
        length: usize,
        expected: usize,
    },

    /// First line is not an `AA` header record.
    #[error("missing header record: first line must start with '{expected}'")]
    MissingHeader { expected: &'static str },

    /// Last line is not a `BB` trailer record.
    #[error("missing trailer record: last line must start with '{expected}'")]
    MissingTrailer { expected: &'static str },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for block operations.
pub type Result<T> = std::result::Result<T, BlockError>;

impl BlockError {
    /// Create an InvalidLineLength error.
    pub fn invalid_line_length(line: usize, length: usize) -> Self {
        Self::InvalidLineLength {
            line,
            length,
            expected: crate::record::BLOCK_LEN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BlockError::invalid_line_length(3, 127);
        assert_eq!(
            format!("{err}"),
            "line 3 has 127 characters, expected 128"
        );

        let err = BlockError::MissingTrailer { expected: "BB" };
        assert_eq!(
            format!("{err}"),
            "missing trailer record: last line must start with 'BB'"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "test");
        let err: BlockError = io_err.into();
        assert!(matches!(err, BlockError::Io(_)));
    }
}
