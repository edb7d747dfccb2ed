//! Core validation types.
//!
//! A field is validated by handing its current value and a
//! [`ValidationRuleSet`] to a [`FieldValidator`]. Rules are evaluated in a
//! fixed order and the first one that fails decides the message:
//!
//! ```text
//! required -> email -> phone -> date
//! ```
//!
//! ## Example
//!
//! ```rust
//! use care_guard::core::{FieldValidator, ValidationRuleSet};
//!
//! let validator = FieldValidator::new();
//! let phone = ValidationRuleSet::new().required().phone();
//!
//! assert!(validator.validate("+15551234567", &phone).valid);
//! assert_eq!(
//!     validator.validate("0123", &phone).message,
//!     "Please enter a valid phone number."
//! );
//! ```
//!
//! Nothing is cached between calls, so re-validating a value is always safe.

mod clock;
mod result;
mod rules;
mod validator;

pub use clock::{Clock, FixedClock, SystemClock};
pub use result::ValidationResult;
pub use rules::{Rule, ValidationRuleSet};
pub use validator::{is_email, is_phone, parse_date_value, validate, FieldValidator};
