//! Condition category value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::tables;
use crate::entities::ConditionEntry;
use crate::errors::DomainError;

/// Group of weather condition codes
///
/// The upstream provider partitions its code space by hundreds:
/// - 2xx: Thunderstorm
/// - 3xx: Drizzle
/// - 5xx: Rain
/// - 6xx: Snow
/// - 7xx: Atmosphere
/// - 800-899: Clouds (800 is clear sky)
/// - 900-949: Extreme
/// - 950-999: Additional (wind scale)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionCategory {
    /// Thunderstorm (2xx)
    Thunderstorm,
    /// Drizzle (3xx)
    Drizzle,
    /// Rain (5xx)
    Rain,
    /// Snow (6xx)
    Snow,
    /// Mist, smoke, fog and other atmospheric conditions (7xx)
    Atmosphere,
    /// Clear sky and cloud cover (8xx)
    Clouds,
    /// Extreme events (900-949)
    Extreme,
    /// Wind scale and other additional conditions (950-999)
    Additional,
}

impl ConditionCategory {
    /// All categories in code order
    pub const ALL: [Self; 8] = [
        Self::Thunderstorm,
        Self::Drizzle,
        Self::Rain,
        Self::Snow,
        Self::Atmosphere,
        Self::Clouds,
        Self::Extreme,
        Self::Additional,
    ];

    /// Classify a condition code by its numeric range
    ///
    /// Returns `None` for codes outside every known range (e.g. 4xx).
    /// The code does not need to exist in the catalog.
    #[must_use]
    pub const fn from_id(id: u16) -> Option<Self> {
        match id {
            200..=299 => Some(Self::Thunderstorm),
            300..=399 => Some(Self::Drizzle),
            500..=599 => Some(Self::Rain),
            600..=699 => Some(Self::Snow),
            700..=799 => Some(Self::Atmosphere),
            800..=899 => Some(Self::Clouds),
            900..=949 => Some(Self::Extreme),
            950..=999 => Some(Self::Additional),
            _ => None,
        }
    }

    /// The static table holding this category's conditions
    #[must_use]
    pub fn table(self) -> &'static [ConditionEntry] {
        match self {
            Self::Thunderstorm => tables::THUNDERSTORM,
            Self::Drizzle => tables::DRIZZLE,
            Self::Rain => tables::RAIN,
            Self::Snow => tables::SNOW,
            Self::Atmosphere => tables::ATMOSPHERE,
            Self::Clouds => tables::CLOUDS,
            Self::Extreme => tables::EXTREME,
            Self::Additional => tables::ADDITIONAL,
        }
    }

    /// Lowercase name of the category
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Thunderstorm => "thunderstorm",
            Self::Drizzle => "drizzle",
            Self::Rain => "rain",
            Self::Snow => "snow",
            Self::Atmosphere => "atmosphere",
            Self::Clouds => "clouds",
            Self::Extreme => "extreme",
            Self::Additional => "additional",
        }
    }
}

impl fmt::Display for ConditionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ConditionCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "thunderstorm" => Ok(Self::Thunderstorm),
            "drizzle" => Ok(Self::Drizzle),
            "rain" => Ok(Self::Rain),
            "snow" => Ok(Self::Snow),
            "atmosphere" => Ok(Self::Atmosphere),
            "cloud" | "clouds" => Ok(Self::Clouds),
            "extreme" => Ok(Self::Extreme),
            "additional" => Ok(Self::Additional),
            _ => Err(DomainError::UnknownCategory(s.to_string())),
        }
    }
}
