//! City name value object

use serde::Serialize;
use std::fmt;

use crate::errors::DomainError;

/// A non-blank city name as typed by the user
///
/// Surrounding whitespace is trimmed; the original casing is kept for the
/// upstream query while [`CityName::normalized`] gives the cache form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CityName(String);

impl CityName {
    /// Create a city name from raw user input
    ///
    /// # Errors
    ///
    /// Returns `DomainError::CityRequired` if the input is empty or whitespace only.
    pub fn new(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::CityRequired);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The trimmed name, as sent upstream
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lower-cased form used for cache lookups
    #[must_use]
    pub fn normalized(&self) -> String {
        self.0.to_lowercase()
    }
}

impl fmt::Display for CityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_input() {
        let city = CityName::new("  Bogotá ").unwrap();
        assert_eq!(city.as_str(), "Bogotá");
        assert_eq!(city.normalized(), "bogotá");
    }

    #[test]
    fn blank_is_rejected() {
        assert!(matches!(CityName::new(""), Err(DomainError::CityRequired)));
        assert!(matches!(CityName::new(" \t\n"), Err(DomainError::CityRequired)));
    }
}
