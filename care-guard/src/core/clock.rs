//! Source of "today" for the date rule.

use chrono::{Local, NaiveDate};
use std::fmt::Debug;

/// Provides the current local date.
pub trait Clock: Debug + Send + Sync {
    /// Today's date in the visitor's local time zone.
    fn today(&self) -> NaiveDate;
}

/// Reads the system clock in local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
