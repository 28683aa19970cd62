//! Canonical data model for EDA dunning applications.
//!
//! A [`ClaimRecord`] is the single value handed from input normalization to
//! document building: two parties, one principal claim and the procedural
//! context.

pub mod claim;
pub mod error;
pub mod party;

pub use claim::{
    AMOUNT_SCALE, CURRENCY, CaseContext, Claim, ClaimRecord, DEFAULT_COURT, DEFAULT_SUBJECT,
    parse_amount,
};
pub use error::{ModelError, Result};
pub use party::{Party, PartyField, PartyRole, check_text};
