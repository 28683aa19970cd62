//! Mapping of decoded input onto the canonical claim model.

use eda_model::{CaseContext, Claim, ClaimRecord, Party, PartyField, PartyRole, parse_amount};

use crate::csv::RowInput;
use crate::error::{IngestError, Result};
use crate::format::InputFormat;
use crate::json::StructuredInput;

/// Key of the principal amount in both layouts.
pub const AMOUNT_KEY: &str = "hauptforderung";
/// Key of the optional claim subject.
pub const SUBJECT_KEY: &str = "gegenstand";
/// Key of the optional competent court.
pub const COURT_KEY: &str = "amtsgericht";
/// Key of the optional recipient authority.
pub const RECIPIENT_KEY: &str = "mahngericht";
/// JSON group holding the claim fields.
pub const CLAIM_GROUP: &str = "forderung";

/// Decoded input, tagged by layout.
#[derive(Debug, Clone, PartialEq)]
pub enum RawInput {
    Row(RowInput),
    Structured(StructuredInput),
}

impl RawInput {
    pub fn format(&self) -> InputFormat {
        match self {
            RawInput::Row(_) => InputFormat::Csv,
            RawInput::Structured(_) => InputFormat::Json,
        }
    }
}

/// Produce a validated [`ClaimRecord`] from decoded input.
pub fn normalize(raw: &RawInput) -> Result<ClaimRecord> {
    let record = match raw {
        RawInput::Row(row) => normalize_row(row)?,
        RawInput::Structured(input) => normalize_structured(input)?,
    };
    tracing::debug!(
        format = %raw.format(),
        amount = %record.claim.amount_text(),
        "normalized claim record"
    );
    Ok(record)
}

fn normalize_row(row: &RowInput) -> Result<ClaimRecord> {
    let party = |role: PartyRole| -> Result<Party> {
        let value = |field: PartyField| {
            row.require(&format!("{}_{}", role.key_prefix(), field.source_key()))
        };
        Ok(Party::new(
            value(PartyField::Name)?,
            value(PartyField::Street)?,
            value(PartyField::HouseNumber)?,
            value(PartyField::PostalCode)?,
            value(PartyField::City)?,
        ))
    };
    let creditor = party(PartyRole::Creditor)?;
    let debtor = party(PartyRole::Debtor)?;

    let amount = parse_amount(row.require(AMOUNT_KEY)?)?;
    let claim = Claim::new(amount, row.get(SUBJECT_KEY).map(str::to_string));
    let context = CaseContext::new(
        row.get(COURT_KEY).map(str::to_string),
        row.get(RECIPIENT_KEY).map(str::to_string),
    );

    assemble(creditor, debtor, claim, context)
}

fn normalize_structured(input: &StructuredInput) -> Result<ClaimRecord> {
    let party = |role: PartyRole| -> Result<Party> {
        let value = |field: PartyField| input.require(&[role.key_prefix(), field.source_key()]);
        Ok(Party::new(
            value(PartyField::Name)?,
            value(PartyField::Street)?,
            value(PartyField::HouseNumber)?,
            value(PartyField::PostalCode)?,
            value(PartyField::City)?,
        ))
    };
    let creditor = party(PartyRole::Creditor)?;
    let debtor = party(PartyRole::Debtor)?;

    let amount = parse_amount(&input.require_amount(&[CLAIM_GROUP, AMOUNT_KEY])?)?;
    let claim = Claim::new(amount, input.get(&[CLAIM_GROUP, SUBJECT_KEY])?);
    let context = CaseContext::new(input.get(&[COURT_KEY])?, input.get(&[RECIPIENT_KEY])?);

    assemble(creditor, debtor, claim, context)
}

fn assemble(
    creditor: Party,
    debtor: Party,
    claim: Claim,
    context: CaseContext,
) -> Result<ClaimRecord> {
    ClaimRecord::new(creditor, debtor, claim, context).map_err(IngestError::from)
}
