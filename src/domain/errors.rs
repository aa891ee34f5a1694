//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The email domain is not on the accepted list.
    UnacceptedEmailDomain(String),

    /// The phone number does not follow the `(DD) D DDDD-DDDD` layout.
    MalformedPhone(String),

    /// The phone area code is not a known Brazilian area code.
    UnknownAreaCode(String),

    /// The digit after the area code is not 9.
    MissingMobilePrefix(String),

    /// The CPF does not have exactly 11 digits.
    NationalIdLength(usize),

    /// The CPF is a single digit repeated 11 times.
    RepeatedDigits,

    /// One of the two CPF check digits does not match.
    CheckDigitMismatch { position: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnacceptedEmailDomain(domain) => {
                write!(f, "Email domain not accepted: {}", domain)
            }
            Self::MalformedPhone(phone) => write!(f, "Malformed phone number: {}", phone),
            Self::UnknownAreaCode(code) => write!(f, "Unknown area code: {}", code),
            Self::MissingMobilePrefix(phone) => {
                write!(f, "Phone number must start with 9 after the area code: {}", phone)
            }
            Self::NationalIdLength(len) => write!(f, "CPF must have 11 digits, got {}", len),
            Self::RepeatedDigits => write!(f, "CPF cannot repeat a single digit"),
            Self::CheckDigitMismatch { position } => {
                write!(f, "CPF check digit at position {} does not match", position)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
