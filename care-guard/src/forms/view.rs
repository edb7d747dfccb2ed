//! Presentation state derived from validation results.
//!
//! [`FormView`] is what a page binding renders: the error class and message
//! of each field, the submit button, and which of the form and its success
//! panel is showing.

use super::{FieldOutcome, FormReport, FormSchema};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Error display state of one field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldState {
    /// Whether the field carries the `error` class
    pub has_error: bool,
    /// Text of the field's error element
    pub message: String,
}

/// State of the submit button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitButton {
    /// Button text
    pub label: String,
    /// Whether the `loading` class is set
    pub loading: bool,
    /// Whether the button is disabled
    pub disabled: bool,
}

/// Everything a page binding needs to render one form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormView {
    /// Error state by field id; fields never validated are absent
    pub fields: BTreeMap<String, FieldState>,
    /// Submit button
    pub button: SubmitButton,
    /// Whether the form is displayed
    pub form_visible: bool,
    /// Whether the success panel is displayed
    pub success_visible: bool,
    /// Id of the success panel
    pub success_view: String,
}

impl FormView {
    /// Initial state for `schema`.
    pub fn new(schema: &FormSchema) -> Self {
        Self {
            fields: BTreeMap::new(),
            button: SubmitButton {
                label: schema.submit_label.clone(),
                loading: false,
                disabled: false,
            },
            form_visible: true,
            success_visible: false,
            success_view: schema.success_view.clone(),
        }
    }

    /// Shows or clears the error of one field.
    pub fn apply_outcome(&mut self, outcome: &FieldOutcome) {
        let state = self.fields.entry(outcome.field_id.clone()).or_default();
        state.has_error = !outcome.result.valid;
        state.message = outcome.result.message.clone();
    }

    /// Applies every outcome of `report`.
    pub fn apply_report(&mut self, report: &FormReport) {
        for outcome in &report.outcomes {
            self.apply_outcome(outcome);
        }
    }

    /// State of `field_id`; untouched fields have no error.
    pub fn field(&self, field_id: &str) -> FieldState {
        self.fields.get(field_id).cloned().unwrap_or_default()
    }

    /// Number of fields currently showing an error.
    pub fn error_count(&self) -> usize {
        self.fields.values().filter(|f| f.has_error).count()
    }

    /// Puts the button in its loading state.
    pub fn begin_submit(&mut self, schema: &FormSchema) {
        self.button = SubmitButton {
            label: schema.submitting_label.clone(),
            loading: true,
            disabled: true,
        };
    }

    /// Hides the form, shows the success panel and resets field state.
    pub fn finish_submit(&mut self, schema: &FormSchema) {
        self.form_visible = false;
        self.success_visible = true;
        self.restore_button(schema);
        self.clear_errors();
    }

    /// Returns the button to its idle state.
    pub fn restore_button(&mut self, schema: &FormSchema) {
        self.button = SubmitButton {
            label: schema.submit_label.clone(),
            loading: false,
            disabled: false,
        };
    }

    /// Clears every error class and message.
    pub fn clear_errors(&mut self) {
        for state in self.fields.values_mut() {
            *state = FieldState::default();
        }
    }

    /// Hides the success panel.
    pub fn hide_success(&mut self) {
        self.success_visible = false;
    }
}
