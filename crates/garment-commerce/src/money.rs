//! Money type for representing monetary values.
//!
//! Storefront prices are whole currency units (no minor units), so amounts
//! are plain integers and no rounding ever happens.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul};

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    INR,
    USD,
    EUR,
    GBP,
}

impl Currency {
    /// Get the currency code (e.g., "INR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
        }
    }

    /// Get the currency symbol (e.g., "₹").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "\u{20b9}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "INR" => Some(Currency::INR),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value in whole units of a currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in whole currency units.
    pub amount: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value.
    pub fn new(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Format with symbol and thousands grouping (e.g., "₹1,299").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format without symbol (e.g., "1,299").
    pub fn display_amount(&self) -> String {
        let digits = self.amount.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }
        if self.amount < 0 {
            grouped.insert(0, '-');
        }
        grouped
    }

    /// Multiply by a scalar, saturating at the `i64` bounds.
    pub fn multiply(&self, factor: i64) -> Money {
        Money::new(self.amount.saturating_mul(factor), self.currency)
    }

    /// Sum amounts into this currency.
    ///
    /// Amounts are taken as already expressed in `currency`. The sum
    /// saturates at the `i64` bounds.
    pub fn sum(amounts: impl Iterator<Item = i64>, currency: Currency) -> Money {
        Money::new(amounts.fold(0, i64::saturating_add), currency)
    }
}

impl Add for Money {
    type Output = Money;

    /// Adds amounts, keeping the left-hand currency.
    fn add(self, other: Money) -> Money {
        Money::new(self.amount.saturating_add(other.amount), self.currency)
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        self.multiply(factor)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(500, Currency::INR).display(), "\u{20b9}500");
        assert_eq!(Money::new(1299, Currency::INR).display(), "\u{20b9}1,299");
        assert_eq!(Money::new(1_234_567, Currency::USD).display(), "$1,234,567");
        assert_eq!(Money::new(0, Currency::INR).display(), "\u{20b9}0");
    }

    #[test]
    fn test_money_negative_display() {
        assert_eq!(Money::new(-1500, Currency::GBP).display_amount(), "-1,500");
    }

    #[test]
    fn test_money_arithmetic() {
        let a = Money::new(1000, Currency::INR);
        let b = Money::new(500, Currency::INR);
        assert_eq!((a + b).amount, 1500);
        assert_eq!((a * 3).amount, 3000);
    }

    #[test]
    fn test_money_sum() {
        let total = Money::sum([100, 250, 650].into_iter(), Currency::INR);
        assert_eq!(total, Money::new(1000, Currency::INR));
        assert!(Money::sum(std::iter::empty(), Currency::INR).is_zero());
    }

    #[test]
    fn test_money_saturates() {
        let max = Money::new(i64::MAX, Currency::INR);
        assert_eq!((max + Money::new(100, Currency::INR)).amount, i64::MAX);
        assert_eq!((Money::new(i64::MAX / 2, Currency::INR) * 3).amount, i64::MAX);
        assert_eq!(Money::sum([i64::MAX, 1].into_iter(), Currency::INR).amount, i64::MAX);
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("INR"), Some(Currency::INR));
        assert_eq!(Currency::from_code("eur"), Some(Currency::EUR));
        assert_eq!(Currency::from_code("JPY"), None);
    }
}
