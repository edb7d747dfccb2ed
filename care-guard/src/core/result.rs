//! Validation result type.

use super::Rule;
use serde::{Deserialize, Serialize};

/// The outcome of validating one field.
///
/// `message` is empty when `valid` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether every active rule passed
    pub valid: bool,
    /// Message for the visitor, empty on success
    pub message: String,
    /// The rule that failed, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule: Option<Rule>,
}

impl ValidationResult {
    /// Creates a passing result.
    pub fn valid() -> Self {
        Self {
            valid: true,
            message: String::new(),
            rule: None,
        }
    }

    /// Creates a failing result carrying the rule's own message.
    pub fn failed(rule: Rule) -> Self {
        Self {
            valid: false,
            message: rule.message().to_string(),
            rule: Some(rule),
        }
    }

    /// Creates a failing result with a custom message.
    ///
    /// Used by page-level checks that are not one of the four rules
    /// (consent boxes, minimum message length).
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
            rule: None,
        }
    }

    /// Returns true if the field passed.
    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::valid()
    }
}
