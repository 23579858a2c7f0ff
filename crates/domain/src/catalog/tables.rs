//! Static condition tables
//!
//! Each table is ordered by ascending condition code.

use crate::entities::{ConditionEntry, IconMapping};

/// Day/night icon pairs keyed by coarse condition label
pub static ICON_MAPPINGS: &[IconMapping] = &[
    IconMapping::new("clear sky", "01d.png", "01n.png"),
    IconMapping::new("few clouds", "02d.png", "02n.png"),
    IconMapping::new("scattered clouds", "03d.png", "03n.png"),
    IconMapping::new("broken clouds", "04d.png", "04n.png"),
    IconMapping::new("shower rain", "09d.png", "09n.png"),
    IconMapping::new("rain", "10d.png", "10n.png"),
    IconMapping::new("thunderstorm", "11d.png", "11n.png"),
    IconMapping::new("snow", "13d.png", "13n.png"),
    IconMapping::new("mist", "50d.png", "50n.png"),
];

pub static THUNDERSTORM: &[ConditionEntry] = &[
    ConditionEntry::new(200, "thunderstorm with light rain", "11d.png"),
    ConditionEntry::new(201, "thunderstorm with rain", "11d.png"),
    ConditionEntry::new(202, "thunderstorm with heavy rain", "11d.png"),
    ConditionEntry::new(210, "light thunderstorm", "11d.png"),
    ConditionEntry::new(211, "thunderstorm", "11d.png"),
    ConditionEntry::new(212, "heavy thunderstorm", "11d.png"),
    ConditionEntry::new(221, "ragged thunderstorm", "11d.png"),
    ConditionEntry::new(230, "thunderstorm with light drizzle", "11d.png"),
    ConditionEntry::new(231, "thunderstorm with drizzle", "11d.png"),
    ConditionEntry::new(232, "thunderstorm with heavy drizzle", "11d.png"),
];

pub static DRIZZLE: &[ConditionEntry] = &[
    ConditionEntry::new(300, "light intensity drizzle", "09d.png"),
    ConditionEntry::new(301, "drizzle", "09d.png"),
    ConditionEntry::new(302, "heavy intensity drizzle", "09d.png"),
    ConditionEntry::new(310, "light intensity drizzle rain", "09d.png"),
    ConditionEntry::new(311, "drizzle rain", "09d.png"),
    ConditionEntry::new(312, "heavy intensity drizzle rain", "09d.png"),
    ConditionEntry::new(313, "shower rain and drizzle", "09d.png"),
    ConditionEntry::new(314, "heavy shower rain and drizzle", "09d.png"),
    ConditionEntry::new(321, "shower drizzle", "09d.png"),
];

pub static RAIN: &[ConditionEntry] = &[
    ConditionEntry::new(500, "light rain", "09d.png"),
    ConditionEntry::new(501, "moderate rain", "09d.png"),
    ConditionEntry::new(502, "heavy intensity rain", "09d.png"),
    ConditionEntry::new(503, "very heavy rain", "09d.png"),
    ConditionEntry::new(504, "extreme rain", "09d.png"),
    ConditionEntry::new(511, "freezing rain", "13d.png"),
    ConditionEntry::new(520, "light intensity shower rain", "09d.png"),
    ConditionEntry::new(521, "shower rain", "09d.png"),
    ConditionEntry::new(522, "heavy intensity shower rain", "09d.png"),
    ConditionEntry::new(531, "ragged shower rain", "09d.png"),
];

pub static SNOW: &[ConditionEntry] = &[
    ConditionEntry::new(600, "light snow", "13d.png"),
    ConditionEntry::new(601, "snow", "13d.png"),
    ConditionEntry::new(602, "heavy snow", "13d.png"),
    ConditionEntry::new(611, "sleet", "13d.png"),
    ConditionEntry::new(612, "shower sleet", "13d.png"),
    ConditionEntry::new(615, "light rain and snow", "13d.png"),
    ConditionEntry::new(616, "rain and snow", "13d.png"),
    ConditionEntry::new(620, "light shower snow", "13d.png"),
    ConditionEntry::new(621, "shower snow", "13d.png"),
    ConditionEntry::new(622, "heavy shower snow", "13d.png"),
];

pub static ATMOSPHERE: &[ConditionEntry] = &[
    ConditionEntry::new(701, "mist", "50d.png"),
    ConditionEntry::new(711, "smoke", "50d.png"),
    ConditionEntry::new(721, "haze", "50d.png"),
    ConditionEntry::new(731, "sand, dust whirls", "50d.png"),
    ConditionEntry::new(741, "fog", "50d.png"),
    ConditionEntry::new(751, "sand", "50d.png"),
    ConditionEntry::new(761, "dust", "50d.png"),
    ConditionEntry::new(762, "volcanic ash", "50d.png"),
    ConditionEntry::new(771, "squalls", "50d.png"),
    ConditionEntry::new(781, "tornado", "50d.png"),
];

// Secondary icons are the provider's published values, including the
// day-variant repeats for 802-804.
pub static CLOUDS: &[ConditionEntry] = &[
    ConditionEntry::with_secondary(800, "clear sky", "01d.png", "01n.png"),
    ConditionEntry::with_secondary(801, "few clouds", "02d.png", "02n.png"),
    ConditionEntry::with_secondary(802, "scattered clouds", "03d.png", "03d.png"),
    ConditionEntry::with_secondary(803, "broken clouds", "04d.png", "03d.png"),
    ConditionEntry::with_secondary(804, "overcast clouds", "04d.png", "04d.png"),
];

pub static EXTREME: &[ConditionEntry] = &[
    ConditionEntry::new(900, "tornado", ""),
    ConditionEntry::new(901, "tropical storm", ""),
    ConditionEntry::new(902, "hurricane", ""),
    ConditionEntry::new(903, "cold", ""),
    ConditionEntry::new(904, "hot", ""),
    ConditionEntry::new(905, "windy", ""),
    ConditionEntry::new(906, "hail", ""),
];

pub static ADDITIONAL: &[ConditionEntry] = &[
    ConditionEntry::new(951, "calm", ""),
    ConditionEntry::new(952, "light breeze", ""),
    ConditionEntry::new(953, "gentle breeze", ""),
    ConditionEntry::new(954, "moderate breeze", ""),
    ConditionEntry::new(955, "fresh breeze", ""),
    ConditionEntry::new(956, "strong breeze", ""),
    ConditionEntry::new(957, "high wind, near gale", ""),
    ConditionEntry::new(958, "gale", ""),
    ConditionEntry::new(959, "severe gale", ""),
    ConditionEntry::new(960, "storm", ""),
    ConditionEntry::new(961, "violent storm", ""),
    ConditionEntry::new(962, "hurricane", ""),
];
