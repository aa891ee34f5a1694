//! Shared form fixtures for integration tests.

#![allow(dead_code)]

use registration_validator::RegistrationForm;

/// Year the fixtures' birth dates are checked against.
pub const REFERENCE_YEAR: i32 = 2026;

/// A submission that passes every rule.
pub fn valid_form() -> RegistrationForm {
    RegistrationForm {
        name: "Maria Oliveira".to_string(),
        birth_date: "1995-08-21".to_string(),
        email: "maria@hotmail.com".to_string(),
        phone: "(35) 9 9876-5432".to_string(),
        national_id: "529.982.247-25".to_string(),
        postal_code: "37550-000".to_string(),
        password: "Secret!!1".to_string(),
        password_confirmation: "Secret!!1".to_string(),
    }
}

/// A valid submission with one field overwritten.
pub fn form_with(edit: impl FnOnce(&mut RegistrationForm)) -> RegistrationForm {
    let mut form = valid_form();
    edit(&mut form);
    form
}
