//! Page forms built on the field validator.
//!
//! A [`FormSchema`] lists the fields of a page form with their rule sets.
//! Validating a [`FormInput`] against it yields a [`FormReport`], which a
//! [`FormView`] turns into presentation state. The appointment and contact
//! forms of the site are available as [`FormSchema::appointment`] and
//! [`FormSchema::contact`].
//!
//! ```rust
//! use care_guard::core::FieldValidator;
//! use care_guard::forms::{FormInput, FormSchema, FormView};
//!
//! let schema = FormSchema::contact();
//! let input = FormInput::new()
//!     .with_value("contactName", "Jane Doe")
//!     .with_value("contactEmail", "jane@example")
//!     .with_checkbox("contactConsent", true);
//!
//! let report = schema.validate(&FieldValidator::new(), &input);
//! let mut view = FormView::new(&schema);
//! view.apply_report(&report);
//!
//! assert!(view.field("contactEmail").has_error);
//! ```

mod schema;
mod view;

pub use schema::{
    ConsentSpec, FieldOutcome, FieldSpec, FormInput, FormReport, FormSchema, MinLength,
    APPOINTMENT_FORM, CONTACT_FORM,
};
pub use view::{FieldState, FormView, SubmitButton};

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Selectable range of the appointment date input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateBounds {
    /// Earliest selectable date (`min` attribute)
    pub min: NaiveDate,
    /// Latest selectable date (`max` attribute)
    pub max: NaiveDate,
}

impl DateBounds {
    /// `min` formatted for a date input.
    pub fn min_attr(&self) -> String {
        self.min.format("%Y-%m-%d").to_string()
    }

    /// `max` formatted for a date input.
    pub fn max_attr(&self) -> String {
        self.max.format("%Y-%m-%d").to_string()
    }
}

/// Booking window starting `today` and ending `months` later.
///
/// Month arithmetic clamps to the last day of the target month.
pub fn appointment_date_bounds(today: NaiveDate, months: u32) -> DateBounds {
    let max = today
        .checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX);
    DateBounds { min: today, max }
}
