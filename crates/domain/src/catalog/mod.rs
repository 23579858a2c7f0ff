//! Condition catalog lookups
//!
//! The tables are small and immutable. Per-table lookups scan linearly;
//! catalog-wide lookups go through indexes built once on first use.

pub mod tables;

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::entities::{ConditionEntry, IconMapping};
use crate::value_objects::ConditionCategory;

pub use tables::ICON_MAPPINGS;

static ID_INDEX: LazyLock<HashMap<u16, &'static ConditionEntry>> =
    LazyLock::new(|| conditions().map(|entry| (entry.id, entry)).collect());

static LABEL_INDEX: LazyLock<HashMap<&'static str, &'static IconMapping>> =
    LazyLock::new(|| {
        ICON_MAPPINGS
            .iter()
            .map(|mapping| (mapping.condition, mapping))
            .collect()
    });

/// Find the entry with the given code in a single table
#[must_use]
pub fn lookup_by_id(table: &[ConditionEntry], id: u16) -> Option<&ConditionEntry> {
    table.iter().find(|entry| entry.id == id)
}

/// Find the entry with the given code in a category's table
#[must_use]
pub fn lookup_in(category: ConditionCategory, id: u16) -> Option<&'static ConditionEntry> {
    lookup_by_id(category.table(), id)
}

/// Find the entry with the given code anywhere in the catalog
#[must_use]
pub fn lookup(id: u16) -> Option<&'static ConditionEntry> {
    ID_INDEX.get(&id).copied()
}

/// Find the day/night icon pair for a coarse condition label
///
/// Matching is exact and case-sensitive.
#[must_use]
pub fn lookup_icons_by_condition(label: &str) -> Option<&'static IconMapping> {
    LABEL_INDEX.get(label).copied()
}

/// All condition entries, grouped by category in code order
pub fn conditions() -> impl Iterator<Item = &'static ConditionEntry> {
    ConditionCategory::ALL
        .into_iter()
        .flat_map(ConditionCategory::table)
}

/// The day/night icon table
#[must_use]
pub fn icon_mappings() -> &'static [IconMapping] {
    ICON_MAPPINGS
}

/// Every day and night icon filename in the icon table, without duplicates
#[must_use]
pub fn icon_files() -> Vec<&'static str> {
    let mut files: Vec<&'static str> = Vec::with_capacity(ICON_MAPPINGS.len() * 2);
    for mapping in ICON_MAPPINGS {
        for icon in [mapping.day_icon, mapping.night_icon] {
            if !files.contains(&icon) {
                files.push(icon);
            }
        }
    }
    files
}
