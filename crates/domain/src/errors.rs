//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The city field was empty or whitespace only
    #[error("City is required")]
    CityRequired,

    /// Unknown unit system
    #[error("Invalid units: {0}")]
    InvalidUnits(String),

    /// Malformed language code
    #[error("Invalid language code: {0}")]
    InvalidLanguage(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}
