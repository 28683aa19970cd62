use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{ModelError, Result};
use crate::party::{Party, PartyRole, check_text};

/// Subject text used when the input carries none.
pub const DEFAULT_SUBJECT: &str = "Forderung aus Vertrag";

/// Court used for both the competent court and the recipient when not given.
pub const DEFAULT_COURT: &str = "Zentrales Mahngericht";

/// Currency of every claim amount.
pub const CURRENCY: &str = "EUR";

/// Minimum number of fraction digits in a rendered amount.
pub const AMOUNT_SCALE: u32 = 2;

/// The monetary demand: a single principal claim in EUR.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    pub principal_amount: Decimal,
    pub subject: String,
}

impl Claim {
    pub fn new(principal_amount: Decimal, subject: Option<String>) -> Self {
        Self {
            principal_amount,
            subject: non_empty_or(subject, DEFAULT_SUBJECT),
        }
    }

    /// Amount as written into `Betrag`: at least two fraction digits, `.`
    /// separator. Finer amounts keep all their digits and are never rounded.
    pub fn amount_text(&self) -> String {
        widen_scale(self.principal_amount).to_string()
    }
}

/// Procedural metadata of the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseContext {
    pub competent_court: String,
    pub recipient_authority: String,
}

impl CaseContext {
    pub fn new(competent_court: Option<String>, recipient_authority: Option<String>) -> Self {
        Self {
            competent_court: non_empty_or(competent_court, DEFAULT_COURT),
            recipient_authority: non_empty_or(recipient_authority, DEFAULT_COURT),
        }
    }
}

impl Default for CaseContext {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Canonical aggregate passed from ingestion to document building.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimRecord {
    pub creditor: Party,
    pub debtor: Party,
    pub claim: Claim,
    pub context: CaseContext,
}

impl ClaimRecord {
    /// Assemble a record and check its invariants.
    pub fn new(creditor: Party, debtor: Party, claim: Claim, context: CaseContext) -> Result<Self> {
        let record = Self {
            creditor,
            debtor,
            claim,
            context,
        };
        record.validate()?;
        Ok(record)
    }

    pub fn party(&self, role: PartyRole) -> &Party {
        match role {
            PartyRole::Creditor => &self.creditor,
            PartyRole::Debtor => &self.debtor,
        }
    }

    /// Both parties complete, amount non-negative and renderable, all text
    /// representable in XML.
    pub fn validate(&self) -> Result<()> {
        self.creditor.validate(PartyRole::Creditor)?;
        self.debtor.validate(PartyRole::Debtor)?;
        check_amount(self.claim.principal_amount)?;
        check_text("forderung.gegenstand", &self.claim.subject)?;
        check_text("amtsgericht", &self.context.competent_court)?;
        check_text("mahngericht", &self.context.recipient_authority)?;
        Ok(())
    }
}

/// Parse a principal amount from its textual form.
///
/// Accepts plain (`1500.50`) and scientific (`1.5e3`) notation. The result is
/// normalized, so `1500.5` and `1500.50` parse to the same value and scale.
pub fn parse_amount(text: &str) -> Result<Decimal> {
    let trimmed = text.trim();
    let amount = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| ModelError::invalid_amount(trimmed, "not a decimal number"))?;
    check_amount(amount)?;
    Ok(amount.normalize())
}

fn check_amount(amount: Decimal) -> Result<()> {
    if amount < Decimal::ZERO {
        return Err(ModelError::invalid_amount(
            amount.to_string(),
            "must not be negative",
        ));
    }
    if widen_scale(amount).scale() < AMOUNT_SCALE {
        return Err(ModelError::invalid_amount(
            amount.to_string(),
            "too many integer digits",
        ));
    }
    Ok(())
}

/// Normalized amount with its scale raised to at least [`AMOUNT_SCALE`].
///
/// `rescale` settles for a lower scale when the mantissa would overflow, so
/// callers check the resulting scale.
fn widen_scale(amount: Decimal) -> Decimal {
    let mut amount = amount.normalize();
    if amount.scale() < AMOUNT_SCALE {
        amount.rescale(AMOUNT_SCALE);
    }
    amount
}

fn non_empty_or(value: Option<String>, default: &str) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_text_uses_two_fraction_digits() {
        let claim = Claim::new(parse_amount("1500.5").unwrap(), None);
        assert_eq!(claim.amount_text(), "1500.50");
        let claim = Claim::new(parse_amount("100").unwrap(), None);
        assert_eq!(claim.amount_text(), "100.00");
        let claim = Claim::new(parse_amount("0.07").unwrap(), None);
        assert_eq!(claim.amount_text(), "0.07");
    }

    #[test]
    fn finer_amounts_keep_their_digits() {
        let claim = Claim::new(parse_amount("1500.505").unwrap(), None);
        assert_eq!(claim.amount_text(), "1500.505");
        let claim = Claim::new(parse_amount("0.001").unwrap(), None);
        assert_eq!(claim.amount_text(), "0.001");
        let claim = Claim::new(parse_amount("1.0050").unwrap(), None);
        assert_eq!(claim.amount_text(), "1.005");
    }

    #[test]
    fn amounts_at_precision_limit() {
        let claim = Claim::new(parse_amount("792281625142643375935439503").unwrap(), None);
        assert_eq!(claim.amount_text(), "792281625142643375935439503.00");
        for text in ["79228162514264337593543950335", "7922816251426433759354395033"] {
            assert!(matches!(
                parse_amount(text),
                Err(ModelError::InvalidAmount { .. })
            ));
        }
    }

    #[test]
    fn parse_amount_normalizes_scale() {
        assert_eq!(
            parse_amount("1500.50").unwrap(),
            parse_amount("1500.5").unwrap()
        );
        assert_eq!(parse_amount("1500.50").unwrap().scale(), 1);
        assert_eq!(parse_amount("1.5e3").unwrap(), Decimal::new(1500, 0));
    }

    #[test]
    fn parse_amount_rejects_bad_values() {
        assert!(matches!(
            parse_amount("-1"),
            Err(ModelError::InvalidAmount { .. })
        ));
        assert!(matches!(
            parse_amount("abc"),
            Err(ModelError::InvalidAmount { .. })
        ));
        assert!(matches!(
            parse_amount(""),
            Err(ModelError::InvalidAmount { .. })
        ));
        assert!(parse_amount("1.005").is_ok());
    }

    #[test]
    fn defaults_apply_to_blank_values() {
        let claim = Claim::new(Decimal::ONE, Some("  ".to_string()));
        assert_eq!(claim.subject, DEFAULT_SUBJECT);
        let context = CaseContext::new(Some("AG Wedding".to_string()), None);
        assert_eq!(context.competent_court, "AG Wedding");
        assert_eq!(context.recipient_authority, DEFAULT_COURT);
    }
}
