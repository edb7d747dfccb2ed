//! Site-wide configuration.
//!
//! Defaults match the behavior of the live pages; a JSON file can override
//! any subset of the fields.

use crate::error::{CareError, ErrorContext, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Tunables shared by the page controllers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Simulated network latency for form submission, in milliseconds
    pub submission_delay_ms: u64,
    /// How long a live-region announcement stays in the page, in milliseconds
    pub announcement_ttl_ms: u64,
    /// Viewport width above which the mobile menu is closed on resize
    pub nav_breakpoint_px: u32,
    /// Minimum trimmed length of a contact message
    pub min_message_length: usize,
    /// How far ahead appointments may be booked, in months
    pub booking_window_months: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            submission_delay_ms: 2000,
            announcement_ttl_ms: 1000,
            nav_breakpoint_px: 768,
            min_message_length: 10,
            booking_window_months: 3,
        }
    }
}

impl SiteConfig {
    /// Parses a configuration from JSON; missing keys keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Reading {}", path.display()))?;
        Self::from_json_str(&contents).with_context(|| format!("Parsing {}", path.display()))
    }

    /// Checks that values are usable.
    pub fn validate(&self) -> Result<()> {
        if self.booking_window_months == 0 {
            return Err(CareError::Configuration(
                "booking_window_months must be at least 1".to_string(),
            ));
        }
        if self.nav_breakpoint_px == 0 {
            return Err(CareError::Configuration(
                "nav_breakpoint_px must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Sets the simulated submission delay.
    pub fn with_submission_delay(mut self, delay: Duration) -> Self {
        self.submission_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Sets the announcement lifetime.
    pub fn with_announcement_ttl(mut self, ttl: Duration) -> Self {
        self.announcement_ttl_ms = u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Sets the navigation breakpoint.
    pub fn with_nav_breakpoint(mut self, px: u32) -> Self {
        self.nav_breakpoint_px = px;
        self
    }

    /// Sets the minimum contact message length.
    pub fn with_min_message_length(mut self, length: usize) -> Self {
        self.min_message_length = length;
        self
    }

    /// Sets the booking window.
    pub fn with_booking_window_months(mut self, months: u32) -> Self {
        self.booking_window_months = months;
        self
    }

    /// Simulated submission delay.
    pub fn submission_delay(&self) -> Duration {
        Duration::from_millis(self.submission_delay_ms)
    }

    /// Announcement lifetime.
    pub fn announcement_ttl(&self) -> Duration {
        Duration::from_millis(self.announcement_ttl_ms)
    }
}
