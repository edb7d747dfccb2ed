//! Prelude for commonly used types and traits in care-guard.

pub use crate::config::SiteConfig;
pub use crate::core::{
    validate, Clock, FieldValidator, FixedClock, Rule, SystemClock, ValidationResult,
    ValidationRuleSet,
};
pub use crate::error::{CareError, ErrorContext, Result};
pub use crate::formatting::format_phone_digits;
pub use crate::forms::{FormInput, FormReport, FormSchema, FormView};
pub use crate::logging::LogConfig;
pub use crate::submission::{FormController, SimulatedSubmitter, SubmitOutcome, Submitter};
