//! Declarative rule sets for form fields.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single validation rule.
///
/// Variants are declared in evaluation order; [`Rule::ALL`] preserves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rule {
    /// The trimmed value must not be empty.
    Required,
    /// A non-empty value must look like an email address.
    Email,
    /// A non-empty value must look like a phone number.
    Phone,
    /// A value that parses as a date must not be in the past.
    Date,
}

impl Rule {
    /// Every rule, in evaluation order.
    pub const ALL: [Rule; 4] = [Rule::Required, Rule::Email, Rule::Phone, Rule::Date];

    /// The message shown to the visitor when this rule fails.
    pub fn message(&self) -> &'static str {
        match self {
            Rule::Required => "This field is required.",
            Rule::Email => "Please enter a valid email address.",
            Rule::Phone => "Please enter a valid phone number.",
            Rule::Date => "Please select a future date.",
        }
    }

    /// The rule's identifier as used in rule-set configuration.
    pub fn name(&self) -> &'static str {
        match self {
            Rule::Required => "required",
            Rule::Email => "email",
            Rule::Phone => "phone",
            Rule::Date => "date",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which rules apply to a field.
///
/// Built per field per call; nothing is retained between validations.
///
/// # Examples
///
/// ```rust
/// use care_guard::core::{Rule, ValidationRuleSet};
///
/// let rules = ValidationRuleSet::new().required().email();
/// assert_eq!(rules.active_rules().collect::<Vec<_>>(), vec![Rule::Required, Rule::Email]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationRuleSet {
    /// Reject empty values
    pub required: bool,
    /// Check email shape
    pub email: bool,
    /// Check phone shape
    pub phone: bool,
    /// Reject past dates
    pub date: bool,
}

impl ValidationRuleSet {
    /// Creates an empty rule set; every value passes it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables the `required` rule.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Enables the `email` rule.
    pub fn email(mut self) -> Self {
        self.email = true;
        self
    }

    /// Enables the `phone` rule.
    pub fn phone(mut self) -> Self {
        self.phone = true;
        self
    }

    /// Enables the `date` rule.
    pub fn date(mut self) -> Self {
        self.date = true;
        self
    }

    /// Enables `rule`.
    pub fn with_rule(self, rule: Rule) -> Self {
        match rule {
            Rule::Required => self.required(),
            Rule::Email => self.email(),
            Rule::Phone => self.phone(),
            Rule::Date => self.date(),
        }
    }

    /// Returns true if `rule` is enabled.
    pub fn contains(&self, rule: Rule) -> bool {
        match rule {
            Rule::Required => self.required,
            Rule::Email => self.email,
            Rule::Phone => self.phone,
            Rule::Date => self.date,
        }
    }

    /// Returns true if no rule is enabled.
    pub fn is_empty(&self) -> bool {
        !(self.required || self.email || self.phone || self.date)
    }

    /// Enabled rules in evaluation order.
    pub fn active_rules(&self) -> impl Iterator<Item = Rule> + '_ {
        Rule::ALL.into_iter().filter(move |rule| self.contains(*rule))
    }
}

impl FromIterator<Rule> for ValidationRuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        iter.into_iter()
            .fold(ValidationRuleSet::new(), ValidationRuleSet::with_rule)
    }
}
