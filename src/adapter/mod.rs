//! Collaborator-facing glue around the validation core.
//!
//! The core never touches a UI. A front end implements [`FormView`] and calls
//! [`submit`] when the user submits, and [`MaskedField::on_input`] when a
//! masked input changes.
//!
//! [`MaskedField::on_input`]: crate::masking::MaskedField::on_input

use crate::error::{FormError, FormResult};
use crate::models::RegistrationForm;
use crate::pipeline::FormValidationPipeline;
use crate::validators::messages;
use tracing::warn;

/// Output sink for a submit attempt.
pub trait FormView {
    /// Replace the contents of the single warning slot.
    fn show_warning(&mut self, message: &str);

    /// Blocking notice shown when the form is accepted.
    fn acknowledge(&mut self, message: &str);
}

/// Whether the form's default submission may go ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitDecision {
    Proceed,
    Cancel,
}

impl SubmitDecision {
    pub fn proceeds(&self) -> bool {
        matches!(self, SubmitDecision::Proceed)
    }
}

/// Intercept a submit attempt.
///
/// On rejection the first failure message is written to the warning slot and
/// submission is cancelled. On acceptance the warning slot is left untouched
/// and the view is asked to acknowledge.
pub fn submit<V: FormView + ?Sized>(
    pipeline: &FormValidationPipeline,
    form: &RegistrationForm,
    view: &mut V,
) -> SubmitDecision {
    match intercept(pipeline, form, view) {
        Ok(()) => SubmitDecision::Proceed,
        Err(_) => SubmitDecision::Cancel,
    }
}

/// Same as [`submit`], handing back the validation result itself.
pub fn intercept<V: FormView + ?Sized>(
    pipeline: &FormValidationPipeline,
    form: &RegistrationForm,
    view: &mut V,
) -> FormResult<()> {
    let result = pipeline.validate(form);
    match &result {
        Ok(()) => view.acknowledge(messages::FORM_ACCEPTED),
        Err(err) => {
            if matches!(err, FormError::UnexpectedFailure) {
                warn!("Submission blocked by an unexpected validation failure");
            }
            view.show_warning(&err.to_string());
        }
    }
    result
}

/// A [`FormView`] that keeps what it was told, for headless front ends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BufferedView {
    pub warning: Option<String>,
    pub acknowledgments: Vec<String>,
}

impl BufferedView {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FormView for BufferedView {
    fn show_warning(&mut self, message: &str) {
        self.warning = Some(message.to_string());
    }

    fn acknowledge(&mut self, message: &str) {
        self.acknowledgments.push(message.to_string());
    }
}
