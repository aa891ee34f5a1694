//! Field validators for the registration form.
//!
//! Every validator consumes one raw field value (the confirmation validator
//! also reads the password) and returns a [`ValidationResult`]. The
//! [`FieldValidator`] trait is the seam the pipeline evaluates through.

pub mod fields;
pub mod messages;
pub mod result;

pub use fields::{
    validate_age, validate_email, validate_name, validate_national_id, validate_password,
    validate_password_confirmation, validate_phone,
};
pub use result::ValidationResult;

use crate::models::RegistrationForm;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The validated fields of the registration form, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    BirthDate,
    Email,
    Phone,
    NationalId,
    Password,
    PasswordConfirmation,
}

impl Field {
    /// All fields in the order the pipeline evaluates them.
    pub const ORDER: [Field; 7] = [
        Field::Name,
        Field::BirthDate,
        Field::Email,
        Field::Phone,
        Field::NationalId,
        Field::Password,
        Field::PasswordConfirmation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::BirthDate => "birth_date",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::NationalId => "national_id",
            Field::Password => "password",
            Field::PasswordConfirmation => "password_confirmation",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single step of the form validation pipeline.
pub trait FieldValidator {
    /// The field this validator is responsible for.
    fn field(&self) -> Field;

    /// Validate the relevant value(s) of the submitted form.
    fn validate(&self, form: &RegistrationForm) -> ValidationResult;
}

/// The fixed rule for one field of the registration form.
#[derive(Debug, Clone, Copy)]
pub struct RegistrationRule {
    field: Field,
    current_year: i32,
}

impl RegistrationRule {
    /// Create the rule for `field`; `current_year` feeds the age check.
    pub fn new(field: Field, current_year: i32) -> Self {
        Self {
            field,
            current_year,
        }
    }

    /// Rules for every field, in evaluation order.
    pub fn all(current_year: i32) -> Vec<Self> {
        Field::ORDER
            .iter()
            .map(|&field| Self::new(field, current_year))
            .collect()
    }
}

impl FieldValidator for RegistrationRule {
    fn field(&self) -> Field {
        self.field
    }

    fn validate(&self, form: &RegistrationForm) -> ValidationResult {
        match self.field {
            Field::Name => validate_name(&form.name),
            Field::BirthDate => validate_age(&form.birth_date, self.current_year),
            Field::Email => validate_email(&form.email),
            Field::Phone => validate_phone(&form.phone),
            Field::NationalId => validate_national_id(&form.national_id),
            Field::Password => validate_password(&form.password),
            Field::PasswordConfirmation => {
                validate_password_confirmation(&form.password, &form.password_confirmation)
            }
        }
    }
}
