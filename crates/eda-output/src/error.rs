//! Error types for artifact generation.

use std::path::PathBuf;
use thiserror::Error;

use eda_block::BlockError;
use eda_ingest::IngestError;
use eda_xml::XmlError;

/// Errors that can occur while writing output artifacts.
#[derive(Debug, Error)]
pub enum OutputError {
    /// I/O error while writing an artifact.
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Archive construction failed.
    #[error("failed to build ZIP archive {path}: {source}")]
    Zip {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    /// XML serialization failed.
    #[error("XML serialization failed: {0}")]
    Xml(#[from] XmlError),

    /// Fixed-block framing failed.
    #[error("fixed-block container error: {0}")]
    Block(#[from] BlockError),

    /// Base name is empty or would escape the output directory.
    #[error("invalid output base name '{name}'")]
    InvalidBaseName { name: String },
}

/// Result type alias for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;

impl OutputError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn zip(path: impl Into<PathBuf>, source: zip::result::ZipError) -> Self {
        Self::Zip {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_base_name(name: impl Into<String>) -> Self {
        Self::InvalidBaseName { name: name.into() }
    }
}

/// Errors of the full input-to-artifacts conversion.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

impl From<XmlError> for ConvertError {
    fn from(err: XmlError) -> Self {
        Self::Output(err.into())
    }
}
