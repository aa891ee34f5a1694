//! The seven registration field validators.
//!
//! Each validator is a pure function of its raw input. Required fields reject
//! empty input before any other rule runs.

use super::messages;
use super::ValidationResult;
use crate::domain::{EmailAddress, NationalId, PhoneNumber, ValidationError};
use chrono::{Datelike, NaiveDate};

/// Minimum age, in calendar years, to register.
pub const MINIMUM_AGE: i32 = 18;

/// Minimum password length, in characters.
pub const MINIMUM_PASSWORD_LENGTH: usize = 8;

/// Minimum number of special characters in a password.
pub const MINIMUM_SPECIAL_CHARACTERS: usize = 2;

/// Characters counted as "special" in a password.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Birth dates arrive from a date input as `YYYY-MM-DD`.
const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

/// Name is required; any non-empty value passes.
pub fn validate_name(name: &str) -> ValidationResult {
    if name.is_empty() {
        return ValidationResult::fail(messages::NAME_REQUIRED);
    }
    ValidationResult::pass()
}

/// Birth date is required and the user must be at least [`MINIMUM_AGE`].
///
/// Age is `current_year - birth_year`; month and day are ignored, so a user
/// turning 18 later this year already passes.
pub fn validate_age(birth_date: &str, current_year: i32) -> ValidationResult {
    if birth_date.is_empty() {
        return ValidationResult::fail(messages::BIRTH_DATE_REQUIRED);
    }

    let birth_year = match NaiveDate::parse_from_str(birth_date, BIRTH_DATE_FORMAT) {
        Ok(date) => date.year(),
        Err(_) => return ValidationResult::fail(messages::BIRTH_DATE_INVALID),
    };

    // Widened so extreme reference years cannot overflow
    let age = i64::from(current_year) - i64::from(birth_year);
    if age < i64::from(MINIMUM_AGE) {
        return ValidationResult::fail(messages::UNDER_AGE);
    }

    ValidationResult::pass()
}

/// Email is required and must be on an accepted domain.
pub fn validate_email(email: &str) -> ValidationResult {
    if email.is_empty() {
        return ValidationResult::fail(messages::EMAIL_REQUIRED);
    }

    match EmailAddress::new(email) {
        Ok(_) => ValidationResult::pass(),
        Err(_) => ValidationResult::fail(messages::EMAIL_DOMAIN),
    }
}

/// Phone is optional; when present it must be a valid mobile number.
pub fn validate_phone(phone: &str) -> ValidationResult {
    if phone.is_empty() {
        return ValidationResult::pass();
    }

    match PhoneNumber::new(phone) {
        Ok(_) => ValidationResult::pass(),
        Err(ValidationError::UnknownAreaCode(_)) => {
            ValidationResult::fail(messages::PHONE_AREA_CODE)
        }
        Err(ValidationError::MissingMobilePrefix(_)) => {
            ValidationResult::fail(messages::PHONE_MOBILE_PREFIX)
        }
        Err(_) => ValidationResult::fail(messages::PHONE_INVALID),
    }
}

/// CPF is required and must pass the check-digit verification.
pub fn validate_national_id(national_id: &str) -> ValidationResult {
    if national_id.is_empty() {
        return ValidationResult::fail(messages::NATIONAL_ID_REQUIRED);
    }

    match NationalId::new(national_id) {
        Ok(_) => ValidationResult::pass(),
        Err(err) => {
            tracing::debug!("Rejected CPF: {}", err);
            ValidationResult::fail(messages::NATIONAL_ID_INVALID)
        }
    }
}

/// Password is required, needs [`MINIMUM_PASSWORD_LENGTH`] characters and
/// [`MINIMUM_SPECIAL_CHARACTERS`] characters from [`SPECIAL_CHARACTERS`].
///
/// Length is checked before special characters.
pub fn validate_password(password: &str) -> ValidationResult {
    if password.is_empty() {
        return ValidationResult::fail(messages::PASSWORD_REQUIRED);
    }

    if password.chars().count() < MINIMUM_PASSWORD_LENGTH {
        return ValidationResult::fail(messages::PASSWORD_TOO_SHORT);
    }

    let specials = password
        .chars()
        .filter(|c| SPECIAL_CHARACTERS.contains(*c))
        .count();
    if specials < MINIMUM_SPECIAL_CHARACTERS {
        return ValidationResult::fail(messages::PASSWORD_SPECIALS);
    }

    ValidationResult::pass()
}

/// Confirmation is required and must equal the password when one was typed.
pub fn validate_password_confirmation(password: &str, confirmation: &str) -> ValidationResult {
    if confirmation.is_empty() {
        return ValidationResult::fail(messages::CONFIRMATION_REQUIRED);
    }

    if !password.is_empty() && password != confirmation {
        return ValidationResult::fail(messages::CONFIRMATION_MISMATCH);
    }

    ValidationResult::pass()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name() {
        assert_eq!(validate_name("").message, messages::NAME_REQUIRED);
        assert!(validate_name("Ana").is_valid());
        assert!(validate_name(" ").is_valid());
    }

    #[test]
    fn test_age_required() {
        assert_eq!(validate_age("", 2026).message, messages::BIRTH_DATE_REQUIRED);
    }

    #[test]
    fn test_age_uses_year_only() {
        // Born late in the year: still 17 by the calendar, but passes
        assert!(validate_age("2008-12-31", 2026).is_valid());
        assert!(validate_age("2008-01-01", 2026).is_valid());
        assert_eq!(validate_age("2009-01-01", 2026).message, messages::UNDER_AGE);
    }

    #[test]
    fn test_age_future_birth_date() {
        assert_eq!(validate_age("2030-05-10", 2026).message, messages::UNDER_AGE);
    }

    #[test]
    fn test_age_extreme_reference_years() {
        assert_eq!(validate_age("2020-01-01", i32::MIN).message, messages::UNDER_AGE);
        assert!(validate_age("2020-01-01", i32::MAX).is_valid());
    }

    #[test]
    fn test_age_unparseable_date() {
        assert_eq!(validate_age("10/05/1990", 2026).message, messages::BIRTH_DATE_INVALID);
        assert_eq!(validate_age("1990-02-30", 2026).message, messages::BIRTH_DATE_INVALID);
        assert_eq!(validate_age("yesterday", 2026).message, messages::BIRTH_DATE_INVALID);
    }

    #[test]
    fn test_email() {
        assert!(validate_email("user@gmail.com").is_valid());
        assert_eq!(validate_email("").message, messages::EMAIL_REQUIRED);
        assert_eq!(
            validate_email("user@notarealdomain.com").message,
            messages::EMAIL_DOMAIN
        );
        assert_eq!(validate_email("user@").message, messages::EMAIL_DOMAIN);
    }

    #[test]
    fn test_phone() {
        assert!(validate_phone("").is_valid());
        assert!(validate_phone("(11) 9 8888-7777").is_valid());
        assert_eq!(
            validate_phone("(11) 8 8888-7777").message,
            messages::PHONE_MOBILE_PREFIX
        );
        assert_eq!(
            validate_phone("(23) 9 8888-7777").message,
            messages::PHONE_AREA_CODE
        );
        assert_eq!(validate_phone("11988887777").message, messages::PHONE_INVALID);
    }

    #[test]
    fn test_phone_tocantins_area_code() {
        assert!(validate_phone("(63) 9 8888-7777").is_valid());
    }

    #[test]
    fn test_national_id() {
        assert!(validate_national_id("52998224725").is_valid());
        assert!(validate_national_id("529.982.247-25").is_valid());
        assert_eq!(
            validate_national_id("").message,
            messages::NATIONAL_ID_REQUIRED
        );
        for bad in ["11111111111", "52998224726", "123", "529.982.247-2"] {
            assert_eq!(
                validate_national_id(bad).message,
                messages::NATIONAL_ID_INVALID,
                "{} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_password() {
        assert!(validate_password("abc!@1234").is_valid());
        assert_eq!(validate_password("").message, messages::PASSWORD_REQUIRED);
        assert_eq!(validate_password("abc!1").message, messages::PASSWORD_TOO_SHORT);
        assert_eq!(
            validate_password("abcdefgh!").message,
            messages::PASSWORD_SPECIALS
        );
        // Short passwords report length even when specials are missing
        assert_eq!(validate_password("abc").message, messages::PASSWORD_TOO_SHORT);
    }

    #[test]
    fn test_password_special_set() {
        for c in SPECIAL_CHARACTERS.chars() {
            let password = format!("abcdefg{}{}", c, c);
            assert!(validate_password(&password).is_valid(), "{:?}", password);
        }
        // Underscore and dash are not special
        assert_eq!(
            validate_password("abcdefg_-").message,
            messages::PASSWORD_SPECIALS
        );
    }

    #[test]
    fn test_password_length_counts_characters() {
        // 8 characters, 10 bytes
        assert!(validate_password("ááaaaa!!").is_valid());
    }

    #[test]
    fn test_password_length_counts_astral_characters_once() {
        // 5 characters, even though UTF-16 would count 8 units
        assert_eq!(
            validate_password("😀😀😀!!").message,
            messages::PASSWORD_TOO_SHORT
        );
        assert!(validate_password("😀😀😀😀😀😀!!").is_valid());
    }

    #[test]
    fn test_confirmation() {
        assert_eq!(
            validate_password_confirmation("Secret!!1", "").message,
            messages::CONFIRMATION_REQUIRED
        );
        assert_eq!(
            validate_password_confirmation("Secret!!1", "Secret!!2").message,
            messages::CONFIRMATION_MISMATCH
        );
        assert!(validate_password_confirmation("Secret!!1", "Secret!!1").is_valid());
        // Without a password there is nothing to compare against
        assert!(validate_password_confirmation("", "anything").is_valid());
    }
}
