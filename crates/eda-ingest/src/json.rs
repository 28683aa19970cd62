//! Nested-structured (JSON) input.

use std::io::Read;

use serde_json::Value;

use crate::error::{IngestError, Result};

/// A decoded JSON claim document.
#[derive(Debug, Clone, PartialEq)]
pub struct StructuredInput {
    value: Value,
}

impl StructuredInput {
    /// Wrap a decoded value; the top level must be an object.
    pub fn new(value: Value) -> Result<Self> {
        if !value.is_object() {
            return Err(IngestError::invalid_structure("$", "expected a JSON object"));
        }
        Ok(Self { value })
    }

    /// Scalar at a nested path as text, `None` when absent, null or blank.
    ///
    /// Numbers are returned in their JSON notation, so `"plz": 10115` reads as
    /// `"10115"`.
    pub fn get(&self, path: &[&str]) -> Result<Option<String>> {
        let Some(value) = self.lookup(path)? else {
            return Ok(None);
        };
        scalar_text(value)
            .map(|text| Some(text).filter(|t| !t.is_empty()))
            .ok_or_else(|| {
                IngestError::invalid_structure(path.join("."), "expected text or a number")
            })
    }

    /// Scalar at a required nested path.
    pub fn require(&self, path: &[&str]) -> Result<String> {
        self.get(path)?
            .ok_or_else(|| IngestError::missing_field(path.join(".")))
    }

    /// Required amount text. A value that is neither text nor a number is an
    /// invalid amount rather than a structural error.
    pub fn require_amount(&self, path: &[&str]) -> Result<String> {
        let value = self
            .lookup(path)?
            .ok_or_else(|| IngestError::missing_field(path.join(".")))?;
        let text = scalar_text(value)
            .ok_or_else(|| IngestError::invalid_amount(value.to_string(), "not a decimal number"))?;
        Some(text)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| IngestError::missing_field(path.join(".")))
    }

    /// Value at a nested path, `None` when absent or null.
    fn lookup(&self, path: &[&str]) -> Result<Option<&Value>> {
        let mut current = &self.value;
        for (depth, key) in path.iter().enumerate() {
            match current {
                Value::Object(map) => match map.get(*key) {
                    Some(next) => current = next,
                    None => return Ok(None),
                },
                Value::Null => return Ok(None),
                _ => {
                    return Err(IngestError::invalid_structure(
                        path[..depth].join("."),
                        "expected an object",
                    ));
                }
            }
        }
        Ok(Some(current).filter(|v| !v.is_null()))
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Decode a JSON claim document.
pub fn read_structured<R: Read>(reader: R) -> Result<StructuredInput> {
    let value: Value = serde_json::from_reader(reader)?;
    StructuredInput::new(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_nested_scalars() {
        let input = StructuredInput::new(json!({
            "glaeubiger": {"name": " ACME ", "plz": 10115},
            "forderung": {"hauptforderung": 1500.5, "gegenstand": null}
        }))
        .unwrap();
        assert_eq!(
            input.get(&["glaeubiger", "name"]).unwrap().as_deref(),
            Some("ACME")
        );
        assert_eq!(
            input.get(&["glaeubiger", "plz"]).unwrap().as_deref(),
            Some("10115")
        );
        assert_eq!(
            input.get(&["forderung", "hauptforderung"]).unwrap().as_deref(),
            Some("1500.5")
        );
        assert_eq!(input.get(&["forderung", "gegenstand"]).unwrap(), None);
        assert_eq!(input.get(&["schuldner", "name"]).unwrap(), None);
    }

    #[test]
    fn require_names_dotted_path() {
        let input = StructuredInput::new(json!({"schuldner": {}})).unwrap();
        let err = input.require(&["schuldner", "ort"]).unwrap_err();
        assert_eq!(err.to_string(), "missing required field: schuldner.ort");
    }

    #[test]
    fn non_scalar_amount_is_invalid_amount() {
        let input = StructuredInput::new(json!({"forderung": {"hauptforderung": [1, 2]}})).unwrap();
        assert!(matches!(
            input.require_amount(&["forderung", "hauptforderung"]),
            Err(IngestError::InvalidAmount { ref value, .. }) if value == "[1,2]"
        ));
        let input = StructuredInput::new(json!({"forderung": {"hauptforderung": null}})).unwrap();
        assert!(matches!(
            input.require_amount(&["forderung", "hauptforderung"]),
            Err(IngestError::MissingField { ref field }) if field == "forderung.hauptforderung"
        ));
    }

    #[test]
    fn rejects_non_object_documents() {
        assert!(StructuredInput::new(json!([1, 2])).is_err());
        let input = StructuredInput::new(json!({"glaeubiger": "ACME"})).unwrap();
        assert!(matches!(
            input.get(&["glaeubiger", "name"]),
            Err(IngestError::InvalidStructure { .. })
        ));
    }
}
