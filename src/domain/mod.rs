//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the registration form's
//! structured fields: email addresses, Brazilian mobile phone numbers and
//! CPF national IDs. These value objects validate at construction time so an
//! invalid value can never be represented once it has been accepted.

pub mod email;
pub mod errors;
pub mod national_id;
pub mod phone;

pub use email::{EmailAddress, ACCEPTED_DOMAINS};
pub use errors::ValidationError;
pub use national_id::{check_digits, NationalId};
pub use phone::{PhoneNumber, AREA_CODES};
