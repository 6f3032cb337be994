//! Money Value Object
//!
//! Immutable monetary value with currency.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Money value object with currency
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Create a new money value
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Create money from i64 cents
    pub fn from_cents(cents: i64, currency: Currency) -> Self {
        let amount = Decimal::new(cents, 2);
        Self { amount, currency }
    }

    /// Create zero money
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    /// Create USD money
    pub fn usd(amount: Decimal) -> Self {
        Self::new(amount, Currency::Usd)
    }

    /// Get the amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Get the currency
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Check if same currency
    pub fn same_currency(&self, other: &Money) -> bool {
        self.currency == other.currency
    }

    /// Check if zero
    pub fn is_zero(&self) -> bool {
        self.amount == Decimal::ZERO
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero(Currency::Usd)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency.code())
    }
}

/// Supported currencies
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// US dollar
    Usd,
    /// Saudi riyal
    Sar,
    /// UAE dirham
    Aed,
    /// Indian rupee
    Inr,
}

impl Currency {
    /// ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Sar => "SAR",
            Self::Aed => "AED",
            Self::Inr => "INR",
        }
    }

    /// Parse from ISO 4217 code, defaulting to USD for unknown codes
    pub fn from_code(code: &str) -> Self {
        match code.to_ascii_uppercase().as_str() {
            "SAR" => Self::Sar,
            "AED" => Self::Aed,
            "INR" => Self::Inr,
            _ => Self::Usd,
        }
    }
}
