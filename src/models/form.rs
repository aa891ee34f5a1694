//! Registration form submission and validation report.

use crate::error::{FormError, InputResult};
use crate::validators::Field;
use serde::{Deserialize, Serialize};
use std::io::Read;

/// Raw values of the registration form, read at submit time.
///
/// Every value is passed through untouched; an absent key deserializes as an
/// empty string, which is how an untouched input reads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct RegistrationForm {
    pub name: String,

    /// Birth date as `YYYY-MM-DD`
    pub birth_date: String,

    pub email: String,

    /// Optional mobile phone, `(DD) 9 DDDD-DDDD`
    pub phone: String,

    /// CPF, with or without punctuation
    pub national_id: String,

    /// Masked for display only; never validated
    pub postal_code: String,

    pub password: String,

    pub password_confirmation: String,
}

impl RegistrationForm {
    /// Read a submission encoded as a JSON object.
    pub fn from_json_reader<R: Read>(reader: R) -> InputResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }
}

/// Serializable outcome of one submit attempt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PipelineReport {
    pub valid: bool,

    /// The field blamed for the rejection, absent on success or on an
    /// unexpected failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<Field>,

    /// First failure message, empty on success
    pub message: String,
}

impl PipelineReport {
    pub fn accepted() -> Self {
        Self {
            valid: true,
            field: None,
            message: String::new(),
        }
    }

    pub fn rejected(err: &FormError) -> Self {
        Self {
            valid: false,
            field: err.field(),
            message: err.to_string(),
        }
    }
}

impl From<Result<(), FormError>> for PipelineReport {
    fn from(result: Result<(), FormError>) -> Self {
        match result {
            Ok(()) => Self::accepted(),
            Err(err) => Self::rejected(&err),
        }
    }
}
