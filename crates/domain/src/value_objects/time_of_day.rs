//! Day/night variant of a weather icon

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Whether an icon depicts the day or night variant of a condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    #[default]
    Day,
    Night,
}

impl TimeOfDay {
    /// Suffix character used in icon filenames (`01d.png`, `01n.png`)
    #[must_use]
    pub const fn suffix(self) -> char {
        match self {
            Self::Day => 'd',
            Self::Night => 'n',
        }
    }

    /// Detect the variant from an icon filename such as `10n.png`
    ///
    /// Returns `None` when the stem does not end in `d` or `n`.
    #[must_use]
    pub fn from_icon_file(icon_file: &str) -> Option<Self> {
        let stem = icon_file.trim().strip_suffix(".png")?;
        match stem.chars().last()? {
            'd' => Some(Self::Day),
            'n' => Some(Self::Night),
            _ => None,
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day => write!(f, "day"),
            Self::Night => write!(f, "night"),
        }
    }
}

impl FromStr for TimeOfDay {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "day" | "d" => Ok(Self::Day),
            "night" | "n" => Ok(Self::Night),
            _ => Err(DomainError::InvalidTimeOfDay(s.to_string())),
        }
    }
}
