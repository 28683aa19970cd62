//! Error types for claim ingestion.

use std::path::PathBuf;
use thiserror::Error;

use eda_model::ModelError;

/// Errors that can occur while reading and normalizing claim input.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Input Kind ===
    /// Input is neither CSV nor JSON.
    #[error("unsupported input format '{format}': only .csv and .json are supported")]
    InputFormat { format: String },

    // === Content Errors ===
    /// A required party or claim field is absent or empty.
    #[error("missing required field: {field}")]
    MissingField { field: String },

    /// The principal amount is not a non-negative decimal.
    #[error("invalid claim amount '{value}': {reason}")]
    InvalidAmount { value: String, reason: String },

    /// A text field holds characters XML cannot represent.
    #[error("invalid text in {field}: {reason}")]
    InvalidText { field: String, reason: String },

    /// CSV input has a header row but no data row.
    #[error("input contains no data row")]
    EmptyInput,

    /// JSON value has an unexpected shape.
    #[error("unexpected structure at {path}: {reason}")]
    InvalidStructure { path: String, reason: String },

    // === Decoding Errors ===
    /// Failed to read the input file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV decoding failed.
    #[error("failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// JSON decoding failed.
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl IngestError {
    pub fn input_format(format: impl Into<String>) -> Self {
        Self::InputFormat {
            format: format.into(),
        }
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    pub fn invalid_amount(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAmount {
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_structure(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidStructure {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

impl From<ModelError> for IngestError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::MissingField { field } => Self::MissingField { field },
            ModelError::InvalidAmount { value, reason } => Self::InvalidAmount { value, reason },
            ModelError::InvalidText { field, reason } => Self::InvalidText { field, reason },
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
