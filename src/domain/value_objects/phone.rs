//! Phone Value Object

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Phone number with country code
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Phone {
    country_code: String,
    number: String,
}

impl Phone {
    /// Create a new phone number
    pub fn new(
        country_code: impl Into<String>,
        number: impl Into<String>,
    ) -> Result<Self, PhoneError> {
        let country_code = Self::normalize(country_code.into());
        let number = Self::normalize(number.into());

        if number.is_empty() {
            return Err(PhoneError::Empty);
        }

        if number.len() < 6 || number.len() > 15 {
            return Err(PhoneError::InvalidLength(number.len()));
        }

        if !number.chars().all(|c| c.is_ascii_digit()) {
            return Err(PhoneError::InvalidCharacters);
        }

        Ok(Self {
            country_code,
            number,
        })
    }

    /// Create a phone number without validation, for inputs valid by construction
    pub fn new_unchecked(country_code: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            country_code: Self::normalize(country_code.into()),
            number: Self::normalize(number.into()),
        }
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    fn normalize(value: String) -> String {
        value
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '(' | ')' | '.' | '+'))
            .collect()
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{}-{}", self.country_code, self.number)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhoneError {
    #[error("phone number is empty")]
    Empty,
    #[error("invalid phone number length: {0} digits")]
    InvalidLength(usize),
    #[error("phone number contains non-digit characters")]
    InvalidCharacters,
}
