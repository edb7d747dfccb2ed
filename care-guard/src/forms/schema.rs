//! Form schemas and aggregated form validation.

use crate::config::SiteConfig;
use crate::core::{Clock, FieldValidator, ValidationResult, ValidationRuleSet};
use crate::error::{CareError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Minimum trimmed length for a free-text field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinLength {
    /// Minimum number of characters
    pub chars: usize,
    /// Message shown when the value is too short
    pub message: String,
}

/// How one field of a form is validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Stable field key (the element id)
    pub id: String,
    /// Rules applied on blur and submit
    pub rules: ValidationRuleSet,
    /// Extra length requirement checked after the rules pass
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<MinLength>,
    /// Skip validation entirely while the value is blank
    #[serde(default)]
    pub optional: bool,
    /// Reformat typed input with [`format_phone_digits`](crate::formatting::format_phone_digits)
    #[serde(default)]
    pub format_phone: bool,
}

impl FieldSpec {
    /// Creates a field with the given rules.
    pub fn new(id: impl Into<String>, rules: ValidationRuleSet) -> Self {
        Self {
            id: id.into(),
            rules,
            min_length: None,
            optional: false,
            format_phone: false,
        }
    }

    /// Requires at least `chars` characters once the field is non-empty.
    pub fn with_min_length(mut self, chars: usize, message: impl Into<String>) -> Self {
        self.min_length = Some(MinLength {
            chars,
            message: message.into(),
        });
        self
    }

    /// Only validates the field when it holds a value.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Formats phone digits as the visitor types.
    pub fn formats_phone(mut self) -> Self {
        self.format_phone = true;
        self
    }

    /// Id of the element holding this field's error message.
    pub fn error_id(&self) -> String {
        error_id(&self.id)
    }

    /// Validates `value` against this field's rules and length requirement.
    pub fn check<C: Clock>(&self, validator: &FieldValidator<C>, value: &str) -> ValidationResult {
        let trimmed = value.trim();
        if self.optional && trimmed.is_empty() {
            return ValidationResult::valid();
        }

        let result = validator.validate(value, &self.rules);
        if !result.valid {
            return result;
        }

        match &self.min_length {
            Some(min) if !trimmed.is_empty() && trimmed.chars().count() < min.chars => {
                ValidationResult::invalid(min.message.clone())
            }
            _ => result,
        }
    }

    /// Validates `value` as the form's submit handler does.
    ///
    /// The length requirement also applies to blank values, so an empty
    /// message reports the length message rather than the required one.
    pub fn check_submitted<C: Clock>(
        &self,
        validator: &FieldValidator<C>,
        value: &str,
    ) -> ValidationResult {
        let trimmed = value.trim();
        let result = self.check(validator, value);
        if self.optional && trimmed.is_empty() {
            return result;
        }

        match &self.min_length {
            Some(min) if trimmed.chars().count() < min.chars => {
                ValidationResult::invalid(min.message.clone())
            }
            _ => result,
        }
    }
}

/// A checkbox that must be ticked before submitting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentSpec {
    /// Checkbox id
    pub id: String,
    /// Message shown when unchecked
    pub message: String,
}

/// The current values of a form.
///
/// Fields or checkboxes missing from the input are treated like elements
/// missing from the page: they are skipped, never reported. Use
/// [`FormInput::for_schema`] for a form whose elements all exist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormInput {
    /// Text values by field id
    pub values: BTreeMap<String, String>,
    /// Checkbox states by id
    pub checkboxes: BTreeMap<String, bool>,
}

impl FormInput {
    /// Creates an empty input.
    pub fn new() -> Self {
        Self::default()
    }

    /// An untouched form: every field of `schema` blank, its consent box unticked.
    pub fn for_schema(schema: &FormSchema) -> Self {
        let mut input = Self::new();
        input.fill_missing(schema);
        input
    }

    /// Adds blank values and an unticked consent box for everything in
    /// `schema` this input does not mention yet.
    pub fn fill_missing(&mut self, schema: &FormSchema) {
        for spec in &schema.fields {
            self.values.entry(spec.id.clone()).or_default();
        }
        if let Some(consent) = &schema.consent {
            self.checkboxes.entry(consent.id.clone()).or_insert(false);
        }
    }

    /// Sets a text value.
    pub fn with_value(mut self, id: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(id.into(), value.into());
        self
    }

    /// Sets a checkbox state.
    pub fn with_checkbox(mut self, id: impl Into<String>, checked: bool) -> Self {
        self.checkboxes.insert(id.into(), checked);
        self
    }

    /// Value of `id`, if the field exists.
    pub fn value(&self, id: &str) -> Option<&str> {
        self.values.get(id).map(String::as_str)
    }

    /// Empties every value and unticks every checkbox, keeping the keys.
    pub fn reset(&mut self) {
        self.values.values_mut().for_each(String::clear);
        self.checkboxes.values_mut().for_each(|checked| *checked = false);
    }
}

/// The validation outcome of one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOutcome {
    /// Field id
    pub field_id: String,
    /// Id of the error message element
    pub error_id: String,
    /// Result for this field
    pub result: ValidationResult,
}

impl FieldOutcome {
    fn new(field_id: &str, result: ValidationResult) -> Self {
        Self {
            field_id: field_id.to_string(),
            error_id: error_id(field_id),
            result,
        }
    }
}

/// Results of validating every field of a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormReport {
    /// Form name
    pub form: String,
    /// One outcome per validated field or checkbox, in schema order
    pub outcomes: Vec<FieldOutcome>,
}

impl FormReport {
    /// Returns true if every outcome is valid.
    pub fn is_valid(&self) -> bool {
        self.outcomes.iter().all(|o| o.result.valid)
    }

    /// Outcomes that failed.
    pub fn failures(&self) -> impl Iterator<Item = &FieldOutcome> {
        self.outcomes.iter().filter(|o| !o.result.valid)
    }

    /// Outcome for `field_id`, if it was validated.
    pub fn outcome(&self, field_id: &str) -> Option<&FieldOutcome> {
        self.outcomes.iter().find(|o| o.field_id == field_id)
    }
}

/// Fields, consent box and labels of one page form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSchema {
    /// Form name (the form element id)
    pub name: String,
    /// Fields in validation order
    pub fields: Vec<FieldSpec>,
    /// Checkbox that must be ticked
    pub consent: Option<ConsentSpec>,
    /// Submit button text when idle
    pub submit_label: String,
    /// Submit button text while submitting
    pub submitting_label: String,
    /// Id of the element shown after a successful submission
    pub success_view: String,
}

/// Name of the appointment booking form.
pub const APPOINTMENT_FORM: &str = "appointmentForm";

/// Name of the contact form.
pub const CONTACT_FORM: &str = "contactForm";

impl FormSchema {
    /// The appointment booking form.
    pub fn appointment() -> Self {
        let required = ValidationRuleSet::new().required();
        Self {
            name: APPOINTMENT_FORM.to_string(),
            fields: vec![
                FieldSpec::new("firstName", required),
                FieldSpec::new("lastName", required),
                FieldSpec::new("email", required.email()),
                FieldSpec::new("phone", required.phone()).formats_phone(),
                FieldSpec::new("dateOfBirth", required),
                FieldSpec::new("department", required),
                FieldSpec::new("appointmentDate", required.date()),
                FieldSpec::new("appointmentTime", required),
                FieldSpec::new("appointmentType", required),
            ],
            consent: Some(ConsentSpec {
                id: "consent".to_string(),
                message: "You must consent to receive appointment reminders.".to_string(),
            }),
            submit_label: "Book Appointment".to_string(),
            submitting_label: "Submitting...".to_string(),
            success_view: "successMessage".to_string(),
        }
    }

    /// The contact form with the default minimum message length.
    pub fn contact() -> Self {
        Self::contact_with_min_length(SiteConfig::default().min_message_length)
    }

    /// The contact form requiring messages of at least `min_chars` characters.
    pub fn contact_with_min_length(min_chars: usize) -> Self {
        let required = ValidationRuleSet::new().required();
        Self {
            name: CONTACT_FORM.to_string(),
            fields: vec![
                FieldSpec::new("contactName", required),
                FieldSpec::new("contactEmail", required.email()),
                FieldSpec::new("contactSubject", required),
                FieldSpec::new("contactMessage", required).with_min_length(
                    min_chars,
                    format!(
                        "Please provide a more detailed message (at least {min_chars} characters)."
                    ),
                ),
                FieldSpec::new("contactPhone", ValidationRuleSet::new().phone())
                    .optional()
                    .formats_phone(),
            ],
            consent: Some(ConsentSpec {
                id: "contactConsent".to_string(),
                message: "You must consent to being contacted.".to_string(),
            }),
            submit_label: "Send Message".to_string(),
            submitting_label: "Sending...".to_string(),
            success_view: "contactSuccessMessage".to_string(),
        }
    }

    /// Looks up a built-in form by name (`appointment`/`contact` or the form id).
    pub fn for_name(name: &str, config: &SiteConfig) -> Result<Self> {
        match name {
            "appointment" | APPOINTMENT_FORM => Ok(Self::appointment()),
            "contact" | CONTACT_FORM => Ok(Self::contact_with_min_length(config.min_message_length)),
            other => Err(CareError::UnknownForm(other.to_string())),
        }
    }

    /// Spec of `field_id`, if the form has that field.
    pub fn field(&self, field_id: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.id == field_id)
    }

    /// Validates one field, as on blur.
    ///
    /// Ids the schema does not know are checked against an empty rule set
    /// and therefore pass.
    pub fn validate_field<C: Clock>(
        &self,
        validator: &FieldValidator<C>,
        field_id: &str,
        value: &str,
    ) -> FieldOutcome {
        let result = match self.field(field_id) {
            Some(spec) => spec.check(validator, value),
            None => validator.validate(value, &ValidationRuleSet::new()),
        };
        FieldOutcome::new(field_id, result)
    }

    /// Validates every field present in `input`, then the consent box.
    pub fn validate<C: Clock>(&self, validator: &FieldValidator<C>, input: &FormInput) -> FormReport {
        let mut outcomes: Vec<FieldOutcome> = self
            .fields
            .iter()
            .filter_map(|spec| {
                input.value(&spec.id).map(|value| {
                    FieldOutcome::new(&spec.id, spec.check_submitted(validator, value))
                })
            })
            .collect();

        if let Some(consent) = &self.consent {
            if let Some(&checked) = input.checkboxes.get(&consent.id) {
                let result = if checked {
                    ValidationResult::valid()
                } else {
                    ValidationResult::invalid(consent.message.clone())
                };
                outcomes.push(FieldOutcome::new(&consent.id, result));
            }
        }

        let report = FormReport {
            form: self.name.clone(),
            outcomes,
        };
        tracing::debug!(
            form = %self.name,
            fields = report.outcomes.len(),
            failures = report.failures().count(),
            "Validated form"
        );
        report
    }
}

fn error_id(field_id: &str) -> String {
    format!("{field_id}-error")
}
