//! Claim input ingestion.
//!
//! This crate turns an uploaded CSV or JSON file into the canonical
//! [`ClaimRecord`](eda_model::ClaimRecord).
//!
//! # Features
//!
//! - **Format detection**: `.csv` / `.json` by extension, anything else is rejected
//! - **CSV**: header row plus the first data row, flat `glaeubiger_*` / `schuldner_*` columns
//! - **JSON**: nested `glaeubiger`, `schuldner` and `forderung` groups
//! - **Normalization**: defaults for subject and courts, amount validation
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use eda_ingest::load_claim;
//!
//! let record = load_claim(Path::new("antrag.json"))?;
//! println!("{} EUR", record.claim.amount_text());
//! ```

mod csv;
mod error;
mod format;
mod json;
mod normalize;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use eda_model::ClaimRecord;

// === Error Types ===
pub use error::{IngestError, Result};

// === Input Kinds ===
pub use crate::csv::{RowInput, read_first_row};
pub use format::{InputFormat, ensure_supported_upload};
pub use json::{StructuredInput, read_structured};

// === Normalization ===
pub use normalize::{
    AMOUNT_KEY, CLAIM_GROUP, COURT_KEY, RECIPIENT_KEY, RawInput, SUBJECT_KEY, normalize,
};

/// Decode input of a known format from any reader.
pub fn parse_input<R: Read>(reader: R, format: InputFormat) -> Result<RawInput> {
    match format {
        InputFormat::Csv => read_first_row(reader).map(RawInput::Row),
        InputFormat::Json => read_structured(reader).map(RawInput::Structured),
    }
}

/// Decode an input file, detecting the format from its extension.
pub fn read_input(path: &Path) -> Result<RawInput> {
    let format = InputFormat::from_path(path)?;
    read_input_as(path, format)
}

/// Decode an input file with an explicit format.
pub fn read_input_as(path: &Path, format: InputFormat) -> Result<RawInput> {
    let file = File::open(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), %format, "reading claim input");
    parse_input(BufReader::new(file), format)
}

/// Read and normalize an input file in one step.
pub fn load_claim(path: &Path) -> Result<ClaimRecord> {
    normalize(&read_input(path)?)
}
