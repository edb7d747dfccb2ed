//! Screen-reader announcements.
//!
//! An [`Announcement`] describes a transient ARIA live region: the text to
//! read, how it is announced, and how long the region stays in the page
//! before the presentation layer removes it.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// ARIA live-region politeness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Politeness {
    /// Announced when the reader is idle
    Polite,
}

impl Politeness {
    /// Value for the `aria-live` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Politeness::Polite => "polite",
        }
    }
}

/// A live-region message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    /// Text read to the visitor
    pub text: String,
    /// `aria-live` value
    pub politeness: Politeness,
    /// Whether the region is read as a whole (`aria-atomic`)
    pub atomic: bool,
    /// Time before the region is removed
    #[serde(with = "ttl_millis")]
    pub ttl: Duration,
}

impl Announcement {
    /// Creates a polite, non-atomic announcement.
    pub fn polite(text: impl Into<String>, ttl: Duration) -> Self {
        Self {
            text: text.into(),
            politeness: Politeness::Polite,
            atomic: false,
            ttl,
        }
    }

    /// Announces that a page finished loading.
    pub fn page_loaded(title: &str, ttl: Duration) -> Self {
        Self {
            atomic: true,
            ..Self::polite(format!("Page loaded: {}", title.trim()), ttl)
        }
    }
}

mod ttl_millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(ttl: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_loaded() {
        let announcement = Announcement::page_loaded(" Our Doctors ", Duration::from_secs(1));
        assert_eq!(announcement.text, "Page loaded: Our Doctors");
        assert_eq!(announcement.politeness.as_str(), "polite");
        assert!(announcement.atomic);
    }

    #[test]
    fn test_serializes_ttl_as_millis() {
        let announcement = Announcement::polite("Showing all doctors", Duration::from_secs(1));
        let json = serde_json::to_value(&announcement).unwrap();
        assert_eq!(json["ttl"], 1000);
        assert_eq!(json["politeness"], "polite");
    }
}
