//! User-facing validation messages.

pub const NAME_REQUIRED: &str = "The Name field is required.";

pub const BIRTH_DATE_REQUIRED: &str = "The Birth Date field is required.";
pub const BIRTH_DATE_INVALID: &str = "The Birth Date is invalid.";
pub const UNDER_AGE: &str = "You must be at least 18 years old to register.";

pub const EMAIL_REQUIRED: &str = "The Email field is required.";
pub const EMAIL_DOMAIN: &str = "The email domain is not accepted.";

pub const PHONE_INVALID: &str = "The phone number is invalid.";
pub const PHONE_AREA_CODE: &str = "The phone area code is invalid.";
pub const PHONE_MOBILE_PREFIX: &str = "The phone number must have 9 as its third digit.";

pub const NATIONAL_ID_REQUIRED: &str = "The CPF field is required.";
pub const NATIONAL_ID_INVALID: &str = "The CPF is invalid.";

pub const PASSWORD_REQUIRED: &str = "The Password field is required.";
pub const PASSWORD_TOO_SHORT: &str = "The password must have at least 8 characters.";
pub const PASSWORD_SPECIALS: &str = "The password must contain at least two special characters.";

pub const CONFIRMATION_REQUIRED: &str = "The Confirm Password field is required.";
pub const CONFIRMATION_MISMATCH: &str = "The passwords do not match.";

/// Shown when validation aborts without blaming a field.
pub const UNEXPECTED_FAILURE: &str = "The form could not be validated. Please try again.";

/// Acknowledgment shown once every field passes.
pub const FORM_ACCEPTED: &str = "Form validated successfully!";
