//! Input format detection.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{IngestError, Result};

/// Supported input layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputFormat {
    /// One header row and one data row with flat column names.
    Csv,
    /// Nested object with `glaeubiger`, `schuldner` and `forderung` groups.
    Json,
}

impl InputFormat {
    /// Detect the format from a file extension (case-insensitive, leading dot allowed).
    pub fn from_extension(extension: &str) -> Result<Self> {
        let normalized = extension.trim().trim_start_matches('.').to_ascii_lowercase();
        match normalized.as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(IngestError::input_format(extension)),
        }
    }

    /// Detect the format from a path's extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| IngestError::input_format(path.display().to_string()))?;
        Self::from_extension(extension)
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for InputFormat {
    type Err = IngestError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_extension(s)
    }
}

/// Accept an uploaded file name only when its extension is `csv` or `json`.
///
/// Front ends call this before handing the file to the normalizer and turn
/// the error into a client error.
pub fn ensure_supported_upload(file_name: &str) -> Result<InputFormat> {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .ok_or_else(|| IngestError::input_format(file_name))?;
    InputFormat::from_extension(extension)
}
