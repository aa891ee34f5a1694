//! EmailAddress value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Email domains accepted at registration.
///
/// Matching is exact and case-sensitive; subdomains of an entry are not
/// accepted.
pub const ACCEPTED_DOMAINS: [&str; 6] = [
    "gmail.com",
    "yahoo.com",
    "hotmail.com",
    "outlook.com",
    "muz.ifsuldeminas.edu.br",
    "alunos.ifsuldeminas.edu.br",
];

/// A type-safe wrapper for email addresses on an accepted domain.
///
/// Only the domain is checked: the segment after the first '@' (and before
/// any further '@') must be one of [`ACCEPTED_DOMAINS`].
///
/// # Example
///
/// ```
/// use registration_validator::domain::EmailAddress;
///
/// let email = EmailAddress::new("user@gmail.com").unwrap();
/// assert_eq!(email.domain(), "gmail.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress, validating the domain.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::UnacceptedEmailDomain` if the address has no
    /// '@' or its domain is not accepted.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();

        let domain = Self::domain_of(&email).unwrap_or_default();
        if !ACCEPTED_DOMAINS.contains(&domain) {
            return Err(ValidationError::UnacceptedEmailDomain(domain.to_string()));
        }

        Ok(Self(email))
    }

    fn domain_of(email: &str) -> Option<&str> {
        email.split('@').nth(1)
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the local part (before the first '@').
    pub fn local_part(&self) -> &str {
        self.0.split('@').next().unwrap_or_default()
    }

    /// Get the accepted domain part.
    pub fn domain(&self) -> &str {
        Self::domain_of(&self.0).unwrap_or_default()
    }
}

// Serde support - serialize as string
impl Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for EmailAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        EmailAddress::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
