use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("missing required field: {field}")]
    MissingField { field: String },
    #[error("invalid claim amount '{value}': {reason}")]
    InvalidAmount { value: String, reason: String },
    #[error("invalid text in {field}: {reason}")]
    InvalidText { field: String, reason: String },
}

impl ModelError {
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

    pub fn invalid_text(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidText {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
