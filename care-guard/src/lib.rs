//! # care-guard - Form validation for the MedCare site
//!
//! care-guard holds the interactive logic behind the MedCare hospital
//! website: validating form fields, formatting phone numbers, booking and
//! contact form flows, the doctor directory filter and the mobile
//! navigation menu. Everything is plain Rust with no DOM access; page
//! bindings feed events in and render the returned state.
//!
//! ## Quick Start
//!
//! ```rust
//! use care_guard::prelude::*;
//!
//! let validator = FieldValidator::new();
//! let rules = ValidationRuleSet::new().required().email();
//!
//! let result = validator.validate("jane@example.com", &rules);
//! assert!(result.valid);
//! assert!(result.message.is_empty());
//!
//! let result = validator.validate("not-an-email", &rules);
//! assert_eq!(result.message, "Please enter a valid email address.");
//!
//! assert_eq!(format_phone_digits("555-123-4567"), "(555) 123-4567");
//! ```
//!
//! ## Submitting a form
//!
//! ```rust
//! use care_guard::prelude::*;
//! use std::time::Duration;
//!
//! # async fn example() -> Result<()> {
//! let mut controller = FormController::new(
//!     FormSchema::contact(),
//!     SimulatedSubmitter::new(Duration::from_millis(10)),
//! );
//! controller.set_value("contactName", "Jane Doe");
//! controller.set_value("contactEmail", "jane@example.com");
//! controller.set_value("contactSubject", "Visiting hours");
//! controller.set_value("contactMessage", "When can I visit the ward?");
//! controller.set_checked("contactConsent", true);
//!
//! let outcome = controller.submit().await?;
//! assert!(outcome.is_submitted());
//! assert!(controller.view().success_visible);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **`core`**: rule sets, the field validator and its results
//! - **`formatting`**: phone number formatting
//! - **`forms`**: form schemas, aggregated validation and view state
//! - **`submission`**: the submitter trait and the form controller
//! - **`directory`**: department and doctor tables, doctor card filter
//! - **`navigation`**: mobile menu and keyboard-focus state
//! - **`announce`**: screen-reader live-region messages
//! - **`config`**, **`logging`**, **`error`**: shared plumbing

pub mod announce;
pub mod config;
pub mod core;
pub mod directory;
pub mod error;
pub mod formatting;
pub mod forms;
pub mod logging;
pub mod navigation;
pub mod prelude;
pub mod submission;
