use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ModelError, Result};

/// Role of a party in a dunning application.
///
/// Each role carries the fixed identifiers the EDA layout assigns to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartyRole {
    /// Glaeubiger, the applicant.
    Creditor,
    /// Schuldner, the respondent.
    Debtor,
}

impl PartyRole {
    /// Value of the `parteiTyp` attribute.
    pub fn party_type(&self) -> &'static str {
        match self {
            PartyRole::Creditor => "Antragsteller",
            PartyRole::Debtor => "Antragsgegner",
        }
    }

    /// Value of the `parteiNr` attribute and of the claim references.
    pub fn party_number(&self) -> &'static str {
        match self {
            PartyRole::Creditor => "G1",
            PartyRole::Debtor => "S1",
        }
    }

    /// Key prefix used by both input layouts (`glaeubiger_plz`, `glaeubiger.plz`).
    pub fn key_prefix(&self) -> &'static str {
        match self {
            PartyRole::Creditor => "glaeubiger",
            PartyRole::Debtor => "schuldner",
        }
    }
}

impl fmt::Display for PartyRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key_prefix())
    }
}

/// Address field of a party, in the order the document lists them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartyField {
    Name,
    Street,
    HouseNumber,
    PostalCode,
    City,
}

impl PartyField {
    pub const ALL: [PartyField; 5] = [
        PartyField::Name,
        PartyField::Street,
        PartyField::HouseNumber,
        PartyField::PostalCode,
        PartyField::City,
    ];

    /// Source key suffix shared by the CSV and JSON layouts.
    pub fn source_key(&self) -> &'static str {
        match self {
            PartyField::Name => "name",
            PartyField::Street => "strasse",
            PartyField::HouseNumber => "hausnummer",
            PartyField::PostalCode => "plz",
            PartyField::City => "ort",
        }
    }

    /// Canonical dotted path, e.g. `schuldner.ort`.
    pub fn path(&self, role: PartyRole) -> String {
        format!("{}.{}", role.key_prefix(), self.source_key())
    }
}

/// A named legal entity with a postal address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    pub name: String,
    pub street: String,
    pub house_number: String,
    pub postal_code: String,
    pub city: String,
}

impl Party {
    /// Create a party, trimming surrounding whitespace from every field.
    pub fn new(
        name: impl AsRef<str>,
        street: impl AsRef<str>,
        house_number: impl AsRef<str>,
        postal_code: impl AsRef<str>,
        city: impl AsRef<str>,
    ) -> Self {
        Self {
            name: name.as_ref().trim().to_string(),
            street: street.as_ref().trim().to_string(),
            house_number: house_number.as_ref().trim().to_string(),
            postal_code: postal_code.as_ref().trim().to_string(),
            city: city.as_ref().trim().to_string(),
        }
    }

    pub fn field(&self, field: PartyField) -> &str {
        match field {
            PartyField::Name => &self.name,
            PartyField::Street => &self.street,
            PartyField::HouseNumber => &self.house_number,
            PartyField::PostalCode => &self.postal_code,
            PartyField::City => &self.city,
        }
    }

    /// Check that all five fields are non-empty and representable in XML.
    pub fn validate(&self, role: PartyRole) -> Result<()> {
        for field in PartyField::ALL {
            let value = self.field(field);
            if value.trim().is_empty() {
                return Err(ModelError::missing_field(field.path(role)));
            }
            check_text(&field.path(role), value)?;
        }
        Ok(())
    }
}

/// Reject characters that XML 1.0 cannot carry, even as character references.
pub fn check_text(field: &str, value: &str) -> Result<()> {
    match value.chars().find(|&c| !is_xml_char(c)) {
        Some(c) => Err(ModelError::invalid_text(
            field,
            format!("character U+{:04X} is not allowed", u32::from(c)),
        )),
        None => Ok(()),
    }
}

fn is_xml_char(c: char) -> bool {
    !matches!(
        c,
        '\u{0}'..='\u{8}' | '\u{B}' | '\u{C}' | '\u{E}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}'
    )
}
