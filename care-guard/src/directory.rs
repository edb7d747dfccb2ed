//! Department and doctor tables.
//!
//! Two immutable tables back the site: [`booking_directory`] feeds the
//! doctor drop-down on the appointment form and [`staff_directory`] lists
//! the cards on the doctors page. Both are plain data built once on first
//! use; [`DoctorDirectory::from_json`] loads a replacement table.

use crate::announce::Announcement;
use crate::error::{CareError, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

/// Label of the first option in the doctor drop-down.
pub const ANY_DOCTOR_LABEL: &str = "Any Available Doctor";

/// Value used by filter buttons to show every doctor.
pub const ALL_FILTER: &str = "all";

type Table = &'static [(&'static str, &'static [(&'static str, &'static str)])];

const BOOKING_TABLE: Table = &[
    ("cardiology", &[("dr-carter", "Dr. Emily Carter"), ("dr-wilson", "Dr. James Wilson")]),
    ("neurology", &[("dr-park", "Dr. Lisa Park"), ("dr-kim", "Dr. Robert Kim")]),
    ("orthopedics", &[("dr-gonzalez", "Dr. Maria Gonzalez"), ("dr-thompson", "Dr. David Thompson")]),
    ("pediatrics", &[("dr-lee", "Dr. Jennifer Lee"), ("dr-brown", "Dr. Michael Brown")]),
    ("oncology", &[("dr-anderson", "Dr. Sarah Anderson"), ("dr-taylor", "Dr. Michael Taylor")]),
    ("radiology", &[("dr-white", "Dr. Jennifer White"), ("dr-garcia", "Dr. Carlos Garcia")]),
    ("surgery", &[("dr-johnson", "Dr. Robert Johnson"), ("dr-miller", "Dr. Lisa Miller")]),
    ("womens-health", &[("dr-davis", "Dr. Amanda Davis"), ("dr-wilson-ob", "Dr. Michelle Wilson")]),
    ("general", &[("dr-smith", "Dr. John Smith"), ("dr-jones", "Dr. Mary Jones")]),
];

const STAFF_TABLE: Table = &[
    ("cardiology", &[("dr-carter", "Dr. Emily Carter"), ("dr-wilson", "Dr. James Wilson")]),
    ("neurology", &[("dr-park", "Dr. Lisa Park"), ("dr-kim", "Dr. Robert Kim")]),
    ("orthopedics", &[("dr-gonzalez", "Dr. Maria Gonzalez"), ("dr-thompson", "Dr. David Thompson")]),
    ("pediatrics", &[("dr-lee", "Dr. Jennifer Lee"), ("dr-brown", "Dr. Michael Brown")]),
    ("emergency", &[("dr-davis", "Dr. Sarah Davis"), ("dr-martinez", "Dr. Kevin Martinez")]),
];

static BOOKING: Lazy<DoctorDirectory> = Lazy::new(|| DoctorDirectory::from_table(BOOKING_TABLE));
static STAFF: Lazy<DoctorDirectory> = Lazy::new(|| DoctorDirectory::from_table(STAFF_TABLE));

/// Doctors offered on the appointment form, by department.
pub fn booking_directory() -> &'static DoctorDirectory {
    &BOOKING
}

/// Doctors shown on the doctors page, by department.
pub fn staff_directory() -> &'static DoctorDirectory {
    &STAFF
}

/// A doctor entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    /// Form value submitted for this doctor
    pub value: String,
    /// Display name
    pub name: String,
}

/// An `<option>` of the doctor drop-down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorOption {
    /// Option value; empty for "any doctor"
    pub value: String,
    /// Option text
    pub label: String,
}

/// A doctor card on the doctors page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorCard {
    /// Display name
    pub name: String,
    /// Department slug (`data-department`)
    pub department: String,
}

/// Immutable department → doctors mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DoctorDirectory {
    departments: BTreeMap<String, Vec<Doctor>>,
}

impl DoctorDirectory {
    fn from_table(table: Table) -> Self {
        let departments = table
            .iter()
            .map(|(department, doctors)| {
                let doctors = doctors
                    .iter()
                    .map(|(value, name)| Doctor {
                        value: (*value).to_string(),
                        name: (*name).to_string(),
                    })
                    .collect();
                ((*department).to_string(), doctors)
            })
            .collect();
        Self { departments }
    }

    /// Parses a directory from a JSON object of department → doctor list.
    pub fn from_json(json: &str) -> Result<Self> {
        let directory: Self = serde_json::from_str(json)?;
        if let Some(department) = directory.departments.keys().find(|d| d.trim().is_empty()) {
            return Err(CareError::Parse(format!(
                "Invalid department name '{department}'"
            )));
        }
        Ok(directory)
    }

    /// Loads a directory file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Department slugs, sorted.
    pub fn departments(&self) -> impl Iterator<Item = &str> {
        self.departments.keys().map(String::as_str)
    }

    /// Doctors of `department`; empty for unknown departments.
    pub fn doctors(&self, department: &str) -> &[Doctor] {
        self.departments
            .get(department)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Options for the doctor drop-down after `department` was selected.
    ///
    /// The "any doctor" option always comes first; an empty or unknown
    /// department yields only that option.
    pub fn doctor_options(&self, department: &str) -> Vec<DoctorOption> {
        std::iter::once(DoctorOption {
            value: String::new(),
            label: ANY_DOCTOR_LABEL.to_string(),
        })
        .chain(self.doctors(department).iter().map(|doctor| DoctorOption {
            value: doctor.value.clone(),
            label: doctor.name.clone(),
        }))
        .collect()
    }

    /// Every doctor as a page card, grouped by department.
    pub fn cards(&self) -> Vec<DoctorCard> {
        self.departments
            .iter()
            .flat_map(|(department, doctors)| {
                doctors.iter().map(move |doctor| DoctorCard {
                    name: doctor.name.clone(),
                    department: department.clone(),
                })
            })
            .collect()
    }
}

/// Selection of a filter button on the doctors page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DoctorFilter {
    /// Show every card
    All,
    /// Show cards of one department
    Department(String),
}

impl DoctorFilter {
    /// Parses a `data-filter` attribute value.
    pub fn parse(filter: &str) -> Self {
        match filter.trim() {
            ALL_FILTER => DoctorFilter::All,
            department => DoctorFilter::Department(department.to_string()),
        }
    }

    /// Returns true if a card of `department` is shown.
    pub fn matches(&self, department: &str) -> bool {
        match self {
            DoctorFilter::All => true,
            DoctorFilter::Department(selected) => selected == department,
        }
    }

    /// Live-region message for a filter change.
    pub fn announcement(&self, ttl: Duration) -> Announcement {
        let subject = match self {
            DoctorFilter::All => "all doctors".to_string(),
            DoctorFilter::Department(department) => format!("{department} doctors"),
        };
        Announcement::polite(format!("Showing {subject}"), ttl)
    }
}

/// Display state of one card after filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardVisibility {
    /// The card
    pub card: DoctorCard,
    /// Whether the card is shown
    pub visible: bool,
    /// Fade-in delay for shown cards
    pub animation_delay: Option<Duration>,
}

/// Delay between consecutive visible cards' fade-in.
pub const STAGGER_STEP: Duration = Duration::from_millis(100);

/// Applies `filter` to `cards`, staggering the fade-in of visible cards.
pub fn filter_cards(filter: &DoctorFilter, cards: &[DoctorCard]) -> Vec<CardVisibility> {
    let mut shown: u32 = 0;
    cards
        .iter()
        .map(|card| {
            let visible = filter.matches(&card.department);
            let animation_delay = visible.then(|| {
                let delay = STAGGER_STEP * shown;
                shown += 1;
                delay
            });
            CardVisibility {
                card: card.clone(),
                visible,
                animation_delay,
            }
        })
        .collect()
}
