//! Progressive input masks.
//!
//! Each mask strips every non-digit character and then inserts separators
//! left to right as far as the available digits allow. Partial input is
//! masked partially and never rejected; a fully typed value masks to itself.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static LEADING_TRIPLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]{3})([0-9])").expect("Failed to compile CPF group regex"));
static CPF_TAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]{3})([0-9]{1,2})$").expect("Failed to compile CPF check digit regex")
});
static PHONE_AREA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{2})([0-9])").expect("Failed to compile area code regex"));
static PHONE_SUBSCRIBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9])([0-9]{4})([0-9]{4})$").expect("Failed to compile subscriber regex")
});
static POSTAL_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{5})([0-9])").expect("Failed to compile postal code regex"));

fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Mask a CPF as `DDD.DDD.DDD-DD`.
///
/// ```
/// use registration_validator::masking::mask_national_id;
///
/// assert_eq!(mask_national_id("52998224725"), "529.982.247-25");
/// assert_eq!(mask_national_id("5299"), "529.9");
/// ```
pub fn mask_national_id(raw: &str) -> String {
    let masked = digits_only(raw);
    let masked = LEADING_TRIPLE.replace(&masked, "$1.$2").into_owned();
    let masked = LEADING_TRIPLE.replace(&masked, "$1.$2").into_owned();
    CPF_TAIL.replace(&masked, "$1-$2").into_owned()
}

/// Mask a mobile phone as `(DD) D DDDD-DDDD`.
///
/// The area code is wrapped once a third digit arrives; the subscriber
/// number is split only once all nine of its digits are present.
pub fn mask_phone(raw: &str) -> String {
    let masked = digits_only(raw);
    let masked = PHONE_AREA.replace(&masked, "($1) $2").into_owned();
    PHONE_SUBSCRIBER.replace(&masked, "$1 $2-$3").into_owned()
}

/// Mask a postal code (CEP) as `DDDDD-DDD`.
pub fn mask_postal_code(raw: &str) -> String {
    let masked = digits_only(raw);
    POSTAL_PREFIX.replace(&masked, "$1-$2").into_owned()
}

/// Form inputs that are masked as the user types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaskedField {
    NationalId,
    Phone,
    PostalCode,
}

impl MaskedField {
    /// Masking hook: the value to write back into the input after a change.
    pub fn on_input(&self, value: &str) -> String {
        match self {
            MaskedField::NationalId => mask_national_id(value),
            MaskedField::Phone => mask_phone(value),
            MaskedField::PostalCode => mask_postal_code(value),
        }
    }
}
