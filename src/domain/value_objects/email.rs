//! Email Value Object

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Email address with validation
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// Create a new validated email
    pub fn new(value: impl Into<String>) -> Result<Self, EmailError> {
        let value = value.into().trim().to_lowercase();

        if value.is_empty() {
            return Err(EmailError::Empty);
        }

        if !Self::is_valid_format(&value) {
            return Err(EmailError::InvalidFormat(value));
        }

        Ok(Self(value))
    }

    /// Create email without validation, for inputs valid by construction
    pub fn new_unchecked(value: impl Into<String>) -> Self {
        Self(value.into().trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Domain part of the address (after `@`)
    pub fn domain(&self) -> Option<&str> {
        self.0.split('@').nth(1)
    }

    fn is_valid_format(email: &str) -> bool {
        let parts: Vec<&str> = email.split('@').collect();
        if parts.len() != 2 {
            return false;
        }

        let local = parts[0];
        let domain = parts[1];

        !local.is_empty()
            && !domain.is_empty()
            && domain.contains('.')
            && !domain.starts_with('.')
            && !domain.ends_with('.')
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmailError {
    #[error("email is empty")]
    Empty,
    #[error("invalid email format: {0}")]
    InvalidFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        let email = Email::new("Lead1@Email.com").unwrap();
        assert_eq!(email.as_str(), "lead1@email.com");
        assert_eq!(email.domain(), Some("email.com"));
    }

    #[test]
    fn test_empty_email() {
        assert_eq!(Email::new("  "), Err(EmailError::Empty));
    }

    #[test]
    fn test_invalid_format() {
        assert!(Email::new("no-at-sign").is_err());
        assert!(Email::new("a@b").is_err());
        assert!(Email::new("a@.com").is_err());
    }
}
