//! Registration Validator - validation pipeline and input masks for a user
//! registration form.
//!
//! The library decides, per submit attempt, whether a registration form may
//! be sent on, and reports at most one actionable message when it may not.
//! It also provides the progressive masks applied to the CPF, phone and
//! postal code inputs while the user types.
//!
//! # Architecture
//!
//! - **domain**: Value objects for email, phone and CPF, including the CPF
//!   check-digit algorithm
//! - **validators**: The seven field validators and their messages
//! - **pipeline**: Ordered, short-circuiting evaluation of the validators
//! - **masking**: Progressive display masks
//! - **adapter**: Submit interception and the output sink trait
//! - **models**: The submitted form and the serializable report
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types

pub mod adapter;
pub mod config;
pub mod domain;
pub mod error;
pub mod masking;
pub mod models;
pub mod pipeline;
pub mod validators;

pub use adapter::{intercept, submit, BufferedView, FormView, SubmitDecision};
pub use config::Config;
pub use domain::{EmailAddress, NationalId, PhoneNumber, ValidationError};
pub use error::{ConfigError, FormError, InputError};
pub use masking::{mask_national_id, mask_phone, mask_postal_code, MaskedField};
pub use models::{PipelineReport, RegistrationForm};
pub use pipeline::{FormValidationPipeline, PipelineState};
pub use validators::{Field, FieldValidator, ValidationResult};
