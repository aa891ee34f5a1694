//! Error types for the registration validator.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::validators::{messages, Field};
use thiserror::Error;

/// Outcome of a rejected form submission.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// A field validator rejected its input
    #[error("{message}")]
    FieldInvalid { field: Field, message: String },

    /// Evaluation aborted before any field could be blamed
    #[error("{}", messages::UNEXPECTED_FAILURE)]
    UnexpectedFailure,
}

impl FormError {
    /// The field responsible for the rejection, if any.
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::FieldInvalid { field, .. } => Some(*field),
            Self::UnexpectedFailure => None,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that can occur while reading a form submission.
#[derive(Error, Debug)]
pub enum InputError {
    /// Failed to read the submission
    #[error("Failed to read form input: {0}")]
    Io(#[from] std::io::Error),

    /// Submission is not a valid JSON object
    #[error("Failed to parse form input: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results with FormError
pub type FormResult<T> = Result<T, FormError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with InputError
pub type InputResult<T> = Result<T, InputError>;
