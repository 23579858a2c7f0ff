//! Day/night icon pair for a coarse condition label

use serde::Serialize;

use crate::value_objects::TimeOfDay;

/// Day and night icon filenames for a coarse condition label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct IconMapping {
    /// Lowercase label, e.g. "clear sky"
    pub condition: &'static str,
    /// Daytime icon filename
    pub day_icon: &'static str,
    /// Nighttime icon filename
    pub night_icon: &'static str,
}

impl IconMapping {
    /// Create a day/night icon pair for a condition label
    #[must_use]
    pub const fn new(
        condition: &'static str,
        day_icon: &'static str,
        night_icon: &'static str,
    ) -> Self {
        Self {
            condition,
            day_icon,
            night_icon,
        }
    }

    /// Icon filename for the given time of day
    #[must_use]
    pub const fn icon(&self, time_of_day: TimeOfDay) -> &'static str {
        match time_of_day {
            TimeOfDay::Day => self.day_icon,
            TimeOfDay::Night => self.night_icon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_selects_variant() {
        let mapping = IconMapping::new("mist", "50d.png", "50n.png");
        assert_eq!(mapping.icon(TimeOfDay::Day), "50d.png");
        assert_eq!(mapping.icon(TimeOfDay::Night), "50n.png");
    }
}
