//! Form submission.
//!
//! Submitting a form is an asynchronous task behind the [`Submitter`] trait.
//! The site has no backend yet, so [`SimulatedSubmitter`] waits a fixed
//! delay and always succeeds. [`FormController`] ties a schema, a validator,
//! a submitter and a [`FormView`] together the way a page does: validate on
//! blur and submit, submit only when everything passes, then swap the form
//! for its success panel.

use crate::config::SiteConfig;
use crate::core::{Clock, FieldValidator, SystemClock};
use crate::error::Result;
use crate::formatting::format_phone_digits;
use crate::forms::{FieldOutcome, FormInput, FormReport, FormSchema, FormView};
use crate::logging::LogConfig;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::time::Duration;
use tracing::instrument;

/// Acknowledgement of a submitted form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    /// Form name
    pub form: String,
    /// Number of non-empty values sent
    pub fields: usize,
    /// Completion time
    pub submitted_at: DateTime<Utc>,
}

/// Sends a validated form somewhere.
#[async_trait]
pub trait Submitter: Debug + Send + Sync {
    /// Submits `input`, which has already passed validation against `schema`.
    async fn submit(&self, schema: &FormSchema, input: &FormInput) -> Result<SubmissionReceipt>;
}

/// Stand-in transport that sleeps a fixed delay and then succeeds.
///
/// The delay cannot be cancelled and there is no retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    /// Creates a submitter with the given latency.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Creates a submitter using the configured latency.
    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.submission_delay())
    }

    /// Simulated latency.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::from_config(&SiteConfig::default())
    }
}

#[async_trait]
impl Submitter for SimulatedSubmitter {
    async fn submit(&self, schema: &FormSchema, input: &FormInput) -> Result<SubmissionReceipt> {
        tokio::time::sleep(self.delay).await;
        Ok(SubmissionReceipt {
            form: schema.name.clone(),
            fields: input.values.values().filter(|v| !v.trim().is_empty()).count(),
            submitted_at: Utc::now(),
        })
    }
}

/// Result of a submit attempt that did not error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent
    Invalid(FormReport),
    /// The submitter accepted the form
    Submitted(SubmissionReceipt),
}

impl SubmitOutcome {
    /// Returns true if the form was sent.
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted(_))
    }
}

/// Drives one form through editing, validation and submission.
#[derive(Debug)]
pub struct FormController<S: Submitter, C: Clock = SystemClock> {
    schema: FormSchema,
    validator: FieldValidator<C>,
    submitter: S,
    input: FormInput,
    view: FormView,
    log_config: LogConfig,
}

impl<S: Submitter> FormController<S, SystemClock> {
    /// Creates a controller validating against the system clock.
    pub fn new(schema: FormSchema, submitter: S) -> Self {
        Self::with_validator(schema, submitter, FieldValidator::new())
    }
}

impl<S: Submitter, C: Clock> FormController<S, C> {
    /// Creates a controller with a custom validator.
    ///
    /// Every field starts blank and the consent box unticked.
    pub fn with_validator(schema: FormSchema, submitter: S, validator: FieldValidator<C>) -> Self {
        let view = FormView::new(&schema);
        let input = FormInput::for_schema(&schema);
        Self {
            schema,
            validator,
            submitter,
            input,
            view,
            log_config: LogConfig::default(),
        }
    }

    /// Sets the logging configuration.
    pub fn with_log_config(mut self, log_config: LogConfig) -> Self {
        self.log_config = log_config;
        self
    }

    /// Schema of the controlled form.
    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    /// Current values.
    pub fn input(&self) -> &FormInput {
        &self.input
    }

    /// Current presentation state.
    pub fn view(&self) -> &FormView {
        &self.view
    }

    /// Mutable presentation state, for bindings that dismiss panels.
    pub fn view_mut(&mut self) -> &mut FormView {
        &mut self.view
    }

    /// Records typed input and returns the stored value.
    ///
    /// Phone fields are reformatted as the visitor types.
    pub fn set_value(&mut self, field_id: &str, value: &str) -> &str {
        let stored = match self.schema.field(field_id) {
            Some(spec) if spec.format_phone => format_phone_digits(value),
            _ => value.to_string(),
        };
        self.input.values.insert(field_id.to_string(), stored);
        self.input.value(field_id).unwrap_or_default()
    }

    /// Records a checkbox state.
    pub fn set_checked(&mut self, checkbox_id: &str, checked: bool) {
        self.input
            .checkboxes
            .insert(checkbox_id.to_string(), checked);
    }

    /// Validates one field when it loses focus.
    ///
    /// Returns `None` for ids that are neither form fields nor typed into.
    pub fn blur(&mut self, field_id: &str) -> Option<FieldOutcome> {
        let value = self.input.value(field_id)?;
        let outcome = self.schema.validate_field(&self.validator, field_id, value);
        self.view.apply_outcome(&outcome);
        Some(outcome)
    }

    /// Validates the whole form and submits it if everything passes.
    ///
    /// On success the form is hidden, the success panel shown, and both the
    /// field errors and the values are reset. A submitter error restores the
    /// button and is returned unchanged.
    #[instrument(skip(self), fields(form = %self.schema.name))]
    pub async fn submit(&mut self) -> Result<SubmitOutcome> {
        let report = self.schema.validate(&self.validator, &self.input);
        self.view.apply_report(&report);

        if !report.is_valid() {
            tracing::debug!(
                failures = report.failures().count(),
                "Form not submitted"
            );
            return Ok(SubmitOutcome::Invalid(report));
        }

        self.view.begin_submit(&self.schema);
        crate::log_submission!(self.log_config, form = %self.schema.name, "Submitting form");

        match self.submitter.submit(&self.schema, &self.input).await {
            Ok(receipt) => {
                self.view.finish_submit(&self.schema);
                self.input.reset();
                crate::log_submission!(
                    self.log_config,
                    form = %receipt.form,
                    fields = receipt.fields,
                    "Form submitted"
                );
                Ok(SubmitOutcome::Submitted(receipt))
            }
            Err(e) => {
                self.view.restore_button(&self.schema);
                tracing::warn!(error = %e, "Form submission failed");
                Err(e)
            }
        }
    }
}
