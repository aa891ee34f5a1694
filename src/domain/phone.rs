//! PhoneNumber value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Valid Brazilian area codes (DDD).
pub const AREA_CODES: [&str; 67] = [
    "11", "12", "13", "14", "15", "16", "17", "18", "19", //
    "21", "22", "24", "27", "28", //
    "31", "32", "33", "34", "35", "37", "38", //
    "41", "42", "43", "44", "45", "46", "47", "48", "49", //
    "51", "53", "54", "55", //
    "61", "62", "63", "64", "65", "66", "67", "68", "69", //
    "71", "73", "74", "75", "77", "79", //
    "81", "82", "83", "84", "85", "86", "87", "88", "89", //
    "91", "92", "93", "94", "95", "96", "97", "98", "99",
];

static PHONE_LAYOUT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\([0-9]{2}\) [0-9] [0-9]{4}-[0-9]{4}$")
        .expect("Failed to compile phone layout regex")
});

/// A type-safe wrapper for Brazilian mobile phone numbers.
///
/// Accepted numbers use the display layout `(DD) 9 DDDD-DDDD`, with a known
/// area code and a leading 9 after it.
///
/// # Example
///
/// ```
/// use registration_validator::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("(11) 9 8888-7777").unwrap();
/// assert_eq!(phone.area_code(), "11");
/// assert_eq!(phone.digits_only(), "11988887777");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating layout, area code and mobile prefix.
    ///
    /// # Errors
    ///
    /// - `ValidationError::MalformedPhone` if the layout is wrong
    /// - `ValidationError::UnknownAreaCode` if the area code is not listed
    /// - `ValidationError::MissingMobilePrefix` if the subscriber number does
    ///   not start with 9
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !PHONE_LAYOUT.is_match(&phone) {
            return Err(ValidationError::MalformedPhone(phone));
        }

        // The layout is pure ASCII, so byte offsets are character offsets.
        let area_code = &phone[1..3];
        if !AREA_CODES.contains(&area_code) {
            return Err(ValidationError::UnknownAreaCode(area_code.to_string()));
        }

        if &phone[5..6] != "9" {
            return Err(ValidationError::MissingMobilePrefix(phone));
        }

        Ok(Self(phone))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the two-digit area code.
    pub fn area_code(&self) -> &str {
        &self.0[1..3]
    }

    /// Get the phone number with only digits (no formatting).
    pub fn digits_only(&self) -> String {
        self.0.chars().filter(|c| c.is_ascii_digit()).collect()
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
