//! Form validation pipeline.
//!
//! Runs the field validators in a fixed order and stops at the first failure,
//! so a submit attempt yields at most one message. Each invocation walks a
//! small state machine:
//!
//! ```text
//! Running(0) -> Running(1) -> ... -> Passed
//!      \             \
//!       +-------------+---------> Failed(error)
//! ```
//!
//! A panic raised inside a validator is caught at this boundary and reported
//! as [`FormError::UnexpectedFailure`].

use crate::error::{FormError, FormResult};
use crate::models::RegistrationForm;
use crate::validators::{FieldValidator, RegistrationRule};
use chrono::{Datelike, Local};
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, error, info};

/// Where a single pipeline invocation stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineState {
    /// About to evaluate the validator at this index
    Running(usize),

    /// Every validator passed
    Passed,

    /// Evaluation stopped; no further validator runs
    Failed(FormError),
}

impl PipelineState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, PipelineState::Running(_))
    }
}

/// Ordered, short-circuiting validation of a [`RegistrationForm`].
pub struct FormValidationPipeline {
    validators: Vec<Box<dyn FieldValidator>>,
}

impl FormValidationPipeline {
    /// Build the registration pipeline; `current_year` drives the age check.
    pub fn new(current_year: i32) -> Self {
        let validators = RegistrationRule::all(current_year)
            .into_iter()
            .map(|rule| Box::new(rule) as Box<dyn FieldValidator>)
            .collect();
        Self { validators }
    }

    /// Build the registration pipeline for the current local year.
    pub fn for_today() -> Self {
        Self::new(Local::now().year())
    }

    #[cfg(test)]
    pub(crate) fn with_validators(validators: Vec<Box<dyn FieldValidator>>) -> Self {
        Self { validators }
    }

    /// Advance one transition. Terminal states are returned unchanged.
    ///
    /// An index past the last validator is never reached by [`run`]; it ends
    /// in [`FormError::UnexpectedFailure`] rather than `Passed`.
    ///
    /// [`run`]: FormValidationPipeline::run
    pub fn step(&self, state: PipelineState, form: &RegistrationForm) -> PipelineState {
        let index = match state {
            PipelineState::Running(index) => index,
            terminal => return terminal,
        };

        let Some(validator) = self.validators.get(index) else {
            if index == 0 {
                // Nothing to evaluate
                return PipelineState::Passed;
            }
            error!("Pipeline stepped past its last validator (index {})", index);
            return PipelineState::Failed(FormError::UnexpectedFailure);
        };

        let field = validator.field();
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| validator.validate(form)));

        match outcome {
            Ok(result) if result.valid => {
                debug!("Field {} passed", field);
                if index + 1 == self.validators.len() {
                    PipelineState::Passed
                } else {
                    PipelineState::Running(index + 1)
                }
            }
            Ok(result) => {
                debug!("Field {} failed: {}", field, result.message);
                PipelineState::Failed(FormError::FieldInvalid {
                    field,
                    message: result.message,
                })
            }
            Err(_) => {
                error!("Validator for field {} panicked", field);
                PipelineState::Failed(FormError::UnexpectedFailure)
            }
        }
    }

    /// Run from the initial state to a terminal one.
    pub fn run(&self, form: &RegistrationForm) -> PipelineState {
        let mut state = PipelineState::Running(0);
        while !state.is_terminal() {
            state = self.step(state, form);
        }
        state
    }

    /// Validate the form, returning the first failure.
    pub fn validate(&self, form: &RegistrationForm) -> FormResult<()> {
        match self.run(form) {
            PipelineState::Failed(err) => {
                info!("Form rejected: {}", err);
                Err(err)
            }
            _ => {
                info!("Form accepted");
                Ok(())
            }
        }
    }

    pub fn is_valid(&self, form: &RegistrationForm) -> bool {
        self.validate(form).is_ok()
    }

    /// Number of validators evaluated per successful run.
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl Default for FormValidationPipeline {
    fn default() -> Self {
        Self::for_today()
    }
}
