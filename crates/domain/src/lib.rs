//! Domain layer for the OpenWeatherMap condition catalog
//!
//! Contains the static condition tables, the entities describing a single
//! condition code or icon pair, and the value objects used to classify them.
//! This layer performs no I/O.

pub mod catalog;
pub mod entities;
pub mod errors;
pub mod value_objects;

pub use catalog::{
    conditions, icon_files, icon_mappings, lookup, lookup_by_id, lookup_icons_by_condition,
    lookup_in,
};
pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
