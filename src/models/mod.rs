//! Data models for the registration form.
//!
//! This module contains the submitted form values as handed over by the
//! input collaborator (a UI layer or the CLI adapter).

pub mod form;

pub use form::{PipelineReport, RegistrationForm};
