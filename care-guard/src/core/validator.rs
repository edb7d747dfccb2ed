//! Field validation against a [`ValidationRuleSet`].

use super::{Clock, Rule, SystemClock, ValidationResult, ValidationRuleSet};
use crate::logging::{truncate_field, LogConfig};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

// Hard-coded patterns are compile-time constants and known to be valid.
#[allow(clippy::expect_used)]
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Hard-coded regex pattern should be valid")
});

#[allow(clippy::expect_used)]
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?[1-9][0-9]{0,15}$").expect("Hard-coded regex pattern should be valid")
});

/// Validates single field values.
///
/// The validator is pure apart from reading its [`Clock`] for the `date`
/// rule: the same value and rule set on the same day always produce the same
/// result.
///
/// # Examples
///
/// ```rust
/// use care_guard::core::{FieldValidator, ValidationRuleSet};
///
/// let validator = FieldValidator::new();
/// let result = validator.validate("", &ValidationRuleSet::new().required().email());
/// assert!(!result.valid);
/// assert_eq!(result.message, "This field is required.");
/// ```
#[derive(Debug, Clone, Default)]
pub struct FieldValidator<C: Clock = SystemClock> {
    clock: C,
    log_config: LogConfig,
}

impl FieldValidator<SystemClock> {
    /// Creates a validator reading the local system clock.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock> FieldValidator<C> {
    /// Creates a validator with a custom clock.
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            log_config: LogConfig::default(),
        }
    }

    /// Sets the logging configuration.
    pub fn with_log_config(mut self, log_config: LogConfig) -> Self {
        self.log_config = log_config;
        self
    }

    /// Returns the clock used for the `date` rule.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Validates `value` against `rules`.
    ///
    /// The value is trimmed first. Rules run in the order required, email,
    /// phone, date and the first failure is reported.
    pub fn validate(&self, value: &str, rules: &ValidationRuleSet) -> ValidationResult {
        let value = value.trim();

        for rule in rules.active_rules() {
            if !self.passes(rule, value) {
                crate::log_rule!(
                    self.log_config,
                    rule = rule.name(),
                    value = %truncate_field(value, self.log_config.max_field_length),
                    "Field failed validation"
                );
                return ValidationResult::failed(rule);
            }
        }

        ValidationResult::valid()
    }

    fn passes(&self, rule: Rule, value: &str) -> bool {
        match rule {
            Rule::Required => !value.is_empty(),
            // The remaining rules never reject an empty value.
            _ if value.is_empty() => true,
            Rule::Email => is_email(value),
            Rule::Phone => is_phone(value),
            Rule::Date => match parse_date_value(value) {
                Some(selected) => selected.date() >= self.clock.today(),
                None => true,
            },
        }
    }
}

/// Validates `value` against `rules` using the local system clock.
pub fn validate(value: &str, rules: &ValidationRuleSet) -> ValidationResult {
    FieldValidator::new().validate(value, rules)
}

/// Returns true if `value` has the `local@domain.tld` shape.
pub fn is_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Returns true if `value` is an acceptable phone number.
///
/// Spaces, hyphens and parentheses are ignored; what remains must be an
/// optional `+` followed by 1 to 16 digits, the first of which is not zero.
pub fn is_phone(value: &str) -> bool {
    let compact: String = value
        .chars()
        .filter(|c| !(c.is_whitespace() || matches!(c, '-' | '(' | ')')))
        .collect();
    PHONE_PATTERN.is_match(&compact)
}

/// Parses a date input value into a local date-time.
///
/// Accepts `YYYY-MM-DD` (midnight), `YYYY-MM-DDTHH:MM[:SS]` and RFC 3339
/// timestamps, which are converted to local time.
pub fn parse_date_value(value: &str) -> Option<NaiveDateTime> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(value, format) {
            return Some(datetime);
        }
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|datetime| datetime.with_timezone(&Local).naive_local())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FixedClock;
    use chrono::Days;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn validator() -> FieldValidator<FixedClock> {
        FieldValidator::with_clock(FixedClock(today()))
    }

    #[test]
    fn test_required_rejects_empty_and_whitespace() {
        let rules = ValidationRuleSet::new().required();
        for value in ["", "   ", "\t\n"] {
            let result = validator().validate(value, &rules);
            assert!(!result.valid, "{value:?} should fail");
            assert_eq!(result.message, "This field is required.");
        }
        assert!(validator().validate("Jane", &rules).valid);
    }

    #[test]
    fn test_email_shapes() {
        let rules = ValidationRuleSet::new().email();
        for value in ["jane@example.com", "a@b.c", "first.last@sub.example.org"] {
            assert!(validator().validate(value, &rules).valid, "{value}");
        }
        for value in ["not-an-email", "jane@example", "@example.com", "jane@@example.com", "ja ne@example.com"] {
            let result = validator().validate(value, &rules);
            assert!(!result.valid, "{value}");
            assert_eq!(result.message, "Please enter a valid email address.");
        }
    }

    #[test]
    fn test_email_allows_surrounding_whitespace() {
        let rules = ValidationRuleSet::new().email();
        assert!(validator().validate("  jane@example.com  ", &rules).valid);
    }

    #[test]
    fn test_phone_shapes() {
        let rules = ValidationRuleSet::new().phone();
        for value in ["+15551234567", "(555) 123-4567", "555 123 4567", "7", "1234567890123456"] {
            assert!(validator().validate(value, &rules).valid, "{value}");
        }
        for value in ["0123", "+0123", "12345678901234567", "555.123.4567", "phone", "++1555"] {
            let result = validator().validate(value, &rules);
            assert!(!result.valid, "{value}");
            assert_eq!(result.message, "Please enter a valid phone number.");
        }
    }

    #[test]
    fn test_date_today_is_accepted_yesterday_is_not() {
        let rules = ValidationRuleSet::new().date();
        assert!(validator().validate("2026-10-18", &rules).valid);
        assert!(validator().validate("2026-12-01", &rules).valid);

        let yesterday = today().checked_sub_days(Days::new(1)).unwrap();
        let result = validator().validate(&yesterday.format("%Y-%m-%d").to_string(), &rules);
        assert!(!result.valid);
        assert_eq!(result.message, "Please select a future date.");
    }

    #[test]
    fn test_date_with_time_component() {
        let rules = ValidationRuleSet::new().date();
        assert!(validator().validate("2026-10-18T00:00", &rules).valid);
        assert!(!validator().validate("2026-10-17T23:59:59", &rules).valid);
    }

    #[test]
    fn test_unparseable_date_is_not_rejected() {
        let rules = ValidationRuleSet::new().date();
        assert!(validator().validate("next tuesday", &rules).valid);
    }

    #[test]
    fn test_required_takes_precedence() {
        let result = validator().validate("", &ValidationRuleSet::new().required().email());
        assert_eq!(result.message, "This field is required.");
        assert_eq!(result.rule, Some(Rule::Required));
    }

    #[test]
    fn test_first_failing_rule_wins() {
        // Fails both email and phone; only email is reported.
        let rules = ValidationRuleSet::new().email().phone();
        let result = validator().validate("0000", &rules);
        assert_eq!(result.rule, Some(Rule::Email));
    }

    #[test]
    fn test_empty_value_without_required_passes() {
        let rules = ValidationRuleSet::new().email().phone().date();
        assert_eq!(validator().validate("  ", &rules), ValidationResult::valid());
    }

    #[test]
    fn test_empty_rule_set_accepts_anything() {
        assert!(validator().validate("anything", &ValidationRuleSet::new()).valid);
    }
}
