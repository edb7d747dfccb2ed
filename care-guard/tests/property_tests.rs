//! Property-based tests for the field validator and phone formatting.
//!
//! These pin down the contract page bindings depend on: rule precedence,
//! the exact failure messages, the today-inclusive date boundary, and the
//! ten-digit formatting rule.

use care_guard::core::{FieldValidator, FixedClock, Rule, ValidationResult, ValidationRuleSet};
use care_guard::formatting::format_phone_digits;
use chrono::{Days, NaiveDate};
use proptest::prelude::*;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

fn validator() -> FieldValidator<FixedClock> {
    FieldValidator::with_clock(FixedClock(today()))
}

fn any_rule_set() -> impl Strategy<Value = ValidationRuleSet> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(required, email, phone, date)| ValidationRuleSet {
            required,
            email,
            phone,
            date,
        },
    )
}

proptest! {
    #[test]
    fn required_rejects_blank_values(
        rules in any_rule_set(),
        blank in "[ \t\n]{0,8}",
    ) {
        let rules = rules.required();
        let result = validator().validate(&blank, &rules);
        prop_assert!(!result.valid);
        prop_assert_eq!(result.message, "This field is required.");
    }

    #[test]
    fn well_formed_emails_pass(
        local in "[a-z0-9._%+-]{1,16}",
        domain in "[a-z0-9-]{1,16}",
        tld in "[a-z]{2,6}",
    ) {
        let email = format!("{local}@{domain}.{tld}");
        prop_assert!(validator().validate(&email, &ValidationRuleSet::new().email()).valid);
    }

    #[test]
    fn phone_numbers_with_separators_pass(
        first in 1u8..=9,
        rest in "[0-9]{0,9}",
        plus in any::<bool>(),
    ) {
        let digits = format!("{first}{rest}");
        let formatted = format_phone_digits(&digits);
        let value = if plus { format!("+{formatted}") } else { formatted };
        prop_assert!(validator().validate(&value, &ValidationRuleSet::new().phone()).valid);
    }

    #[test]
    fn leading_zero_phone_numbers_fail(rest in "[0-9]{0,15}") {
        let result = validator().validate(&format!("0{rest}"), &ValidationRuleSet::new().phone());
        prop_assert_eq!(result.rule, Some(Rule::Phone));
    }

    #[test]
    fn dates_from_today_on_pass_and_past_dates_fail(offset in 1u64..3650) {
        let rules = ValidationRuleSet::new().date();
        let future = today().checked_add_days(Days::new(offset)).unwrap();
        let past = today().checked_sub_days(Days::new(offset)).unwrap();

        prop_assert!(validator().validate(&future.to_string(), &rules).valid);
        prop_assert_eq!(
            validator().validate(&past.to_string(), &rules).message,
            "Please select a future date."
        );
    }

    #[test]
    fn validation_is_idempotent(value in "\\PC{0,24}", rules in any_rule_set()) {
        let first = validator().validate(&value, &rules);
        let second = validator().validate(&value, &rules);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn failures_carry_their_rule_message(value in "\\PC{0,24}", rules in any_rule_set()) {
        let result = validator().validate(&value, &rules);
        match result.rule {
            Some(rule) => {
                prop_assert!(rules.contains(rule));
                prop_assert!(!result.valid);
                prop_assert_eq!(result.message, rule.message());
            }
            None => prop_assert_eq!(result, ValidationResult::valid()),
        }
    }

    #[test]
    fn formatted_phone_digits_shape(raw in "[0-9 ()+.-]{0,20}") {
        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
        let formatted = format_phone_digits(&raw);
        if digits.len() == 10 {
            prop_assert_eq!(formatted.len(), 14);
            prop_assert!(formatted.starts_with('('));
            prop_assert_eq!(&formatted[5..6], " ");
            prop_assert_eq!(&formatted[9..10], "-");
        } else {
            prop_assert_eq!(formatted, digits);
        }
    }
}

#[test]
fn documented_examples() {
    let v = validator();
    let required_email = ValidationRuleSet::new().required().email();

    assert_eq!(v.validate("", &required_email).message, "This field is required.");
    assert_eq!(v.validate("  ", &ValidationRuleSet::new().required()).message, "This field is required.");
    assert_eq!(
        v.validate("not-an-email", &ValidationRuleSet::new().email()).message,
        "Please enter a valid email address."
    );
    assert!(v.validate("+15551234567", &ValidationRuleSet::new().phone()).valid);
    assert!(!v.validate("0123", &ValidationRuleSet::new().phone()).valid);
    assert!(v.validate("2026-10-18", &ValidationRuleSet::new().date()).valid);
    assert!(!v.validate("2026-10-17", &ValidationRuleSet::new().date()).valid);

    assert_eq!(format_phone_digits("5551234567"), "(555) 123-4567");
    assert_eq!(format_phone_digits("555-123-4567"), "(555) 123-4567");
    assert_eq!(format_phone_digits("12345"), "12345");
}

#[test]
fn system_clock_accepts_today() {
    let today = chrono::Local::now().date_naive().to_string();
    assert!(care_guard::core::validate(&today, &ValidationRuleSet::new().date()).valid);
}
