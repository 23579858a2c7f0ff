//! Value objects classifying weather conditions

pub mod condition_category;
pub mod time_of_day;

pub use condition_category::ConditionCategory;
pub use time_of_day::TimeOfDay;
