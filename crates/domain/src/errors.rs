//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
///
/// Catalog lookups never fail; a missing id or label is `None`. These errors
/// only cover parsing of user-supplied classifiers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Category name is not one of the known condition groups
    #[error("Unknown condition category: {0}")]
    UnknownCategory(String),

    /// Time of day could not be parsed
    #[error("Invalid time of day: {0}. Use 'day' or 'night'")]
    InvalidTimeOfDay(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_category_error_message() {
        let err = DomainError::UnknownCategory("hail".to_string());
        assert_eq!(err.to_string(), "Unknown condition category: hail");
    }

    #[test]
    fn invalid_time_of_day_error_message() {
        let err = DomainError::InvalidTimeOfDay("dusk".to_string());
        assert!(err.to_string().contains("dusk"));
        assert!(err.to_string().contains("'day'"));
    }
}
