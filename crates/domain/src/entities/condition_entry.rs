//! A single weather condition code

use std::fmt;

use serde::Serialize;

use crate::value_objects::{ConditionCategory, TimeOfDay};

/// One weather condition code with its meaning and icon filenames
///
/// Entries live in the static catalog tables for the lifetime of the process.
/// An empty icon filename means the provider defines no icon for the code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ConditionEntry {
    /// Condition code, unique across the whole catalog
    pub id: u16,
    /// Human-readable meaning
    pub meaning: &'static str,
    /// Icon filename (may be empty)
    pub primary_icon: &'static str,
    /// Alternate icon filename, only populated for cloud conditions
    pub secondary_icon: &'static str,
}

impl ConditionEntry {
    /// Create an entry with a single icon
    #[must_use]
    pub const fn new(id: u16, meaning: &'static str, primary_icon: &'static str) -> Self {
        Self {
            id,
            meaning,
            primary_icon,
            secondary_icon: "",
        }
    }

    /// Create an entry with a primary and a secondary icon
    #[must_use]
    pub const fn with_secondary(
        id: u16,
        meaning: &'static str,
        primary_icon: &'static str,
        secondary_icon: &'static str,
    ) -> Self {
        Self {
            id,
            meaning,
            primary_icon,
            secondary_icon,
        }
    }

    /// Category derived from the code's numeric range
    #[must_use]
    pub const fn category(&self) -> Option<ConditionCategory> {
        ConditionCategory::from_id(self.id)
    }

    /// Whether a primary icon is defined
    #[must_use]
    pub const fn has_icon(&self) -> bool {
        !self.primary_icon.is_empty()
    }

    /// Primary icon, `None` when empty
    #[must_use]
    pub fn primary_icon(&self) -> Option<&'static str> {
        Some(self.primary_icon).filter(|icon| !icon.is_empty())
    }

    /// Secondary icon, `None` when empty
    #[must_use]
    pub fn secondary_icon(&self) -> Option<&'static str> {
        Some(self.secondary_icon).filter(|icon| !icon.is_empty())
    }

    /// Icon to show at the given time of day
    ///
    /// Night prefers the secondary icon and falls back to the primary one.
    #[must_use]
    pub fn icon_for(&self, time_of_day: TimeOfDay) -> Option<&'static str> {
        match time_of_day {
            TimeOfDay::Day => self.primary_icon(),
            TimeOfDay::Night => self.secondary_icon().or_else(|| self.primary_icon()),
        }
    }
}

impl fmt::Display for ConditionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.id, self.meaning)
    }
}
