//! Catalog entities

pub mod condition_entry;
pub mod icon_mapping;

pub use condition_entry::ConditionEntry;
pub use icon_mapping::IconMapping;
