//! First-row CSV reading.

use std::collections::BTreeMap;
use std::io::Read;

use csv::{ReaderBuilder, Trim};

use crate::error::{IngestError, Result};

/// The first data row of a CSV input, keyed by header name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowInput {
    values: BTreeMap<String, String>,
}

impl RowInput {
    /// Build a row from header/value pairs. Keys and values are trimmed.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let values = pairs
            .into_iter()
            .map(|(k, v)| {
                (
                    k.as_ref().trim_matches('\u{feff}').trim().to_string(),
                    v.as_ref().trim().to_string(),
                )
            })
            .collect();
        Self { values }
    }

    /// Value of a column, `None` when the column is absent or blank.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.values
            .get(column)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Value of a required column.
    pub fn require(&self, column: &str) -> Result<&str> {
        self.get(column)
            .ok_or_else(|| IngestError::missing_field(column))
    }
}

/// Read the header row and the first data row.
///
/// Later rows are ignored; a warning is logged when any exist.
pub fn read_first_row<R: Read>(reader: R) -> Result<RowInput> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let mut records = reader.records();

    let first = records.next().ok_or(IngestError::EmptyInput)??;
    let extra_rows = records.count();
    if extra_rows > 0 {
        tracing::warn!(
            extra_rows,
            "CSV input has more than one data row; only the first is used"
        );
    }

    let row = RowInput::from_pairs(headers.iter().zip(first.iter()));
    tracing::debug!(columns = headers.len(), "read CSV claim row");
    Ok(row)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_first_row_and_strips_bom() {
        let input = "\u{feff}a,b\n 1 ,x\n2,y\n";
        let row = read_first_row(input.as_bytes()).expect("read row");
        assert_eq!(row.get("a"), Some("1"));
        assert_eq!(row.get("b"), Some("x"));
    }

    #[test]
    fn blank_and_short_rows_count_as_absent() {
        let row = read_first_row("a,b,c\n1,\n".as_bytes()).expect("read row");
        assert_eq!(row.get("a"), Some("1"));
        assert_eq!(row.get("b"), None);
        assert_eq!(row.get("c"), None);
        assert!(matches!(
            row.require("c"),
            Err(IngestError::MissingField { .. })
        ));
    }

    #[test]
    fn header_only_is_empty_input() {
        let err = read_first_row("a,b\n".as_bytes()).unwrap_err();
        assert!(matches!(err, IngestError::EmptyInput));
    }
}
