use registration_validator::FormView;
use std::collections::HashMap;

/// Form view that records every call it receives.
#[derive(Default)]
pub struct MockFormView {
    pub warning: Option<String>,
    pub acknowledged: Vec<String>,
    call_counts: HashMap<&'static str, usize>,
}

impl MockFormView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_call_count(&self, method: &str) -> usize {
        self.call_counts.get(method).copied().unwrap_or(0)
    }

    fn increment_call_count(&mut self, method: &'static str) {
        *self.call_counts.entry(method).or_insert(0) += 1;
    }
}

impl FormView for MockFormView {
    fn show_warning(&mut self, message: &str) {
        self.increment_call_count("show_warning");
        self.warning = Some(message.to_string());
    }

    fn acknowledge(&mut self, message: &str) {
        self.increment_call_count("acknowledge");
        self.acknowledged.push(message.to_string());
    }
}
