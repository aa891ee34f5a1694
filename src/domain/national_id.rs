//! NationalId (CPF) value object and check-digit algorithm.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

const CPF_LEN: usize = 11;

/// Computes one CPF check digit from the leading digits.
///
/// The first digit is weighted with `digits.len() + 1`, decreasing down to 2.
/// Remainders of 10 and 11 collapse to 0.
fn check_digit(digits: &[u8]) -> u8 {
    let top_weight = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| u32::from(d) * (top_weight - i as u32))
        .sum();

    match (sum * 10) % 11 {
        10 | 11 => 0,
        r => r as u8,
    }
}

/// Computes both check digits for a 9-digit CPF base.
///
/// # Example
///
/// ```
/// use registration_validator::domain::check_digits;
///
/// assert_eq!(check_digits(&[5, 2, 9, 9, 8, 2, 2, 4, 7]), (2, 5));
/// ```
pub fn check_digits(base: &[u8; 9]) -> (u8, u8) {
    let first = check_digit(base);

    let mut extended = [0u8; 10];
    extended[..9].copy_from_slice(base);
    extended[9] = first;

    (first, check_digit(&extended))
}

/// A type-safe wrapper for a CPF, stored as its 11 bare digits.
///
/// Construction strips every non-digit character, so both `529.982.247-25`
/// and `52998224725` produce the same value.
///
/// # Example
///
/// ```
/// use registration_validator::domain::NationalId;
///
/// let cpf = NationalId::new("529.982.247-25").unwrap();
/// assert_eq!(cpf.as_str(), "52998224725");
/// assert_eq!(cpf.formatted(), "529.982.247-25");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NationalId(String);

impl NationalId {
    /// Create a new NationalId from raw input.
    ///
    /// # Errors
    ///
    /// - `ValidationError::NationalIdLength` unless exactly 11 digits remain
    ///   after stripping
    /// - `ValidationError::RepeatedDigits` for ids like `111.111.111-11`
    /// - `ValidationError::CheckDigitMismatch` if either check digit is wrong;
    ///   the first digit is verified before the second
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let digits: Vec<u8> = raw
            .as_ref()
            .chars()
            .filter_map(|c| c.to_digit(10))
            .map(|d| d as u8)
            .collect();

        if digits.len() != CPF_LEN {
            return Err(ValidationError::NationalIdLength(digits.len()));
        }

        if digits.iter().all(|&d| d == digits[0]) {
            return Err(ValidationError::RepeatedDigits);
        }

        if check_digit(&digits[..9]) != digits[9] {
            return Err(ValidationError::CheckDigitMismatch { position: 9 });
        }

        if check_digit(&digits[..10]) != digits[10] {
            return Err(ValidationError::CheckDigitMismatch { position: 10 });
        }

        Ok(Self(digits.iter().map(|d| char::from(b'0' + d)).collect()))
    }

    /// Get the bare 11 digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String of digits.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Render as `DDD.DDD.DDD-DD`.
    pub fn formatted(&self) -> String {
        let d = &self.0;
        format!("{}.{}.{}-{}", &d[0..3], &d[3..6], &d[6..9], &d[9..11])
    }
}

// Serde support - serialize as bare digits
impl Serialize for NationalId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for NationalId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NationalId::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for NationalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted())
    }
}
