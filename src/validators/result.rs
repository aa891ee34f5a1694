//! Per-field validation outcome.

use serde::{Deserialize, Serialize};

/// Pass/fail outcome of a single field validator.
///
/// `message` is empty exactly when `valid` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub message: String,
}

impl ValidationResult {
    /// A passing result.
    pub fn pass() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    /// A failing result carrying a user-facing message.
    pub fn fail(message: impl Into<String>) -> Self {
        let message = message.into();
        debug_assert!(!message.is_empty(), "failures must carry a message");
        Self {
            valid: false,
            message,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::pass()
    }
}
