use crate::error::PaymentError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of payment methods the service knows about.
///
/// Serializes to its canonical identifier (`CREDIT_CARD`, `PAYPAL`). Parsing is
/// lenient about case and separators so `credit-card`, `credit_card` and
/// `CreditCard` all name the same mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum PaymentMode {
    #[serde(rename = "CREDIT_CARD")]
    CreditCard,
    #[serde(rename = "PAYPAL")]
    PayPal,
}

impl PaymentMode {
    /// Every mode, in declaration order.
    pub const ALL: [PaymentMode; 2] = [PaymentMode::CreditCard, PaymentMode::PayPal];

    /// Canonical identifier, as used in batch files and log fields.
    pub fn identifier(&self) -> &'static str {
        match self {
            PaymentMode::CreditCard => "CREDIT_CARD",
            PaymentMode::PayPal => "PAYPAL",
        }
    }

    /// Human readable name used in payment confirmations.
    pub fn method_name(&self) -> &'static str {
        match self {
            PaymentMode::CreditCard => "credit card",
            PaymentMode::PayPal => "PayPal",
        }
    }
}

impl fmt::Display for PaymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for PaymentMode {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_uppercase())
            .collect();

        match normalized.as_str() {
            "CREDITCARD" => Ok(PaymentMode::CreditCard),
            "PAYPAL" => Ok(PaymentMode::PayPal),
            _ => Err(PaymentError::UnknownMode(s.to_string())),
        }
    }
}

impl TryFrom<String> for PaymentMode {
    type Error = PaymentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_separator_and_case_variants() {
        for input in ["CREDIT_CARD", "credit-card", "CreditCard", " credit card "] {
            assert_eq!(input.parse::<PaymentMode>().unwrap(), PaymentMode::CreditCard);
        }
        for input in ["PAYPAL", "paypal", "PayPal", "pay_pal"] {
            assert_eq!(input.parse::<PaymentMode>().unwrap(), PaymentMode::PayPal);
        }
    }

    #[test]
    fn test_parse_unknown_identifier() {
        let result = "bitcoin".parse::<PaymentMode>();
        assert!(matches!(result, Err(PaymentError::UnknownMode(s)) if s == "bitcoin"));
    }

    #[test]
    fn test_display_is_canonical_identifier() {
        assert_eq!(PaymentMode::CreditCard.to_string(), "CREDIT_CARD");
        assert_eq!(PaymentMode::PayPal.to_string(), "PAYPAL");
    }

    #[test]
    fn test_serde_uses_canonical_identifier() {
        let json = serde_json::to_string(&PaymentMode::PayPal).unwrap();
        assert_eq!(json, "\"PAYPAL\"");

        let mode: PaymentMode = serde_json::from_str("\"credit-card\"").unwrap();
        assert_eq!(mode, PaymentMode::CreditCard);

        assert!(serde_json::from_str::<PaymentMode>("\"cash\"").is_err());
    }
}
