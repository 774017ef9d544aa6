//! Simulated payment methods.
//!
//! No money moves. The gateway option always succeeds; the card option only
//! checks that the form is plausibly filled in.

use crate::CommerceError;
use serde::{Deserialize, Serialize};

/// Card form input, normalised the way the form fields format it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CardDetails {
    /// Card number grouped in fours (e.g., "4111 1111 1111 1111").
    pub number: String,
    /// Name on card.
    pub name: String,
    /// Expiry as "MM/YY".
    pub expiry: String,
    /// Up to three digits.
    pub cvv: String,
}

impl CardDetails {
    /// Build card details from raw form input.
    pub fn new(
        number: &str,
        name: impl Into<String>,
        expiry: &str,
        cvv: &str,
    ) -> Self {
        Self {
            number: format_card_number(number),
            name: name.into(),
            expiry: format_expiry(expiry),
            cvv: format_cvv(cvv),
        }
    }

    /// Check the card fields: all present, sixteen-digit number, three-digit CVV.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let missing: Vec<&str> = [
            ("card number", &self.number),
            ("name on card", &self.name),
            ("expiry", &self.expiry),
            ("cvv", &self.cvv),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();

        if !missing.is_empty() {
            return Err(CommerceError::IncompleteCardDetails(missing.join(", ")));
        }

        let digits: String = self.number.chars().filter(|c| !c.is_whitespace()).collect();
        if digits.len() != 16 || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(CommerceError::InvalidCardNumber);
        }

        if self.cvv.len() != 3 {
            return Err(CommerceError::InvalidCvv);
        }

        Ok(())
    }

    /// Last four digits behind a mask (e.g., "•••• 1111").
    pub fn masked(&self) -> String {
        let digits: Vec<char> = self.number.chars().filter(|c| c.is_ascii_digit()).collect();
        let tail: String = digits[digits.len().saturating_sub(4)..].iter().collect();
        format!("\u{2022}\u{2022}\u{2022}\u{2022} {}", tail)
    }
}

/// Strip whitespace and regroup in blocks of four.
fn format_card_number(raw: &str) -> String {
    let compact: Vec<char> = raw.chars().filter(|c| !c.is_whitespace()).collect();
    compact
        .chunks(4)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Keep digits and insert a slash after the month.
fn format_expiry(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).take(4).collect();
    if digits.len() >= 2 {
        format!("{}/{}", &digits[..2], &digits[2..])
    } else {
        digits
    }
}

/// Keep at most three digits.
fn format_cvv(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).take(3).collect()
}

/// How the shopper pays.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "method", rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Hosted payment gateway; simulated, always succeeds.
    Gateway,
    /// Card entered on the page.
    Card(CardDetails),
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Gateway => "gateway",
            PaymentMethod::Card(_) => "card",
        }
    }

    /// Label for receipts.
    pub fn label(&self) -> String {
        match self {
            PaymentMethod::Gateway => "Payment gateway".to_string(),
            PaymentMethod::Card(card) => format!("Card {}", card.masked()),
        }
    }

    /// Validate the method's inputs.
    pub fn validate(&self) -> Result<(), CommerceError> {
        match self {
            PaymentMethod::Gateway => Ok(()),
            PaymentMethod::Card(card) => card.validate(),
        }
    }
}
