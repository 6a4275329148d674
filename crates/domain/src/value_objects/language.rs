//! Language code value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// Response language requested from the provider (e.g. `es`, `en`, `pt_br`)
///
/// Codes are stored lower-cased. Only ASCII letters plus `_`/`-` are accepted,
/// up to 8 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LanguageCode(String);

impl LanguageCode {
    const MAX_LEN: usize = 8;

    /// Create a validated language code
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidLanguage` if the code is empty, too long
    /// or contains characters other than ASCII letters, `_` and `-`.
    pub fn new(code: &str) -> Result<Self, DomainError> {
        let code = code.trim().to_lowercase();
        let valid = !code.is_empty()
            && code.len() <= Self::MAX_LEN
            && code
                .chars()
                .all(|c| c.is_ascii_alphabetic() || c == '_' || c == '-');
        if valid {
            Ok(Self(code))
        } else {
            Err(DomainError::InvalidLanguage(code))
        }
    }

    /// Parse a language code, falling back to `default` when it is missing or invalid
    #[must_use]
    pub fn parse_or(value: Option<&str>, default: &Self) -> Self {
        value
            .and_then(|v| Self::new(v).ok())
            .unwrap_or_else(|| default.clone())
    }

    /// Spanish, the provider default for this service
    #[must_use]
    pub fn spanish() -> Self {
        Self("es".to_string())
    }

    /// Get the code as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Primary language subtag (`pt_br` -> `pt`)
    #[must_use]
    pub fn primary(&self) -> &str {
        self.0
            .split(['_', '-'])
            .next()
            .unwrap_or(self.0.as_str())
    }
}

impl Default for LanguageCode {
    fn default() -> Self {
        Self::spanish()
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for LanguageCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<LanguageCode> for String {
    fn from(code: LanguageCode) -> Self {
        code.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_case() {
        let code = LanguageCode::new(" EN ").unwrap();
        assert_eq!(code.as_str(), "en");
    }

    #[test]
    fn rejects_garbage() {
        assert!(LanguageCode::new("").is_err());
        assert!(LanguageCode::new("e n").is_err());
        assert!(LanguageCode::new("toolonglanguage").is_err());
        assert!(LanguageCode::new("<script>").is_err());
    }

    #[test]
    fn primary_subtag() {
        assert_eq!(LanguageCode::new("pt_br").unwrap().primary(), "pt");
        assert_eq!(LanguageCode::new("zh-tw").unwrap().primary(), "zh");
        assert_eq!(LanguageCode::new("es").unwrap().primary(), "es");
    }

    #[test]
    fn parse_or_uses_default_on_invalid() {
        let default = LanguageCode::spanish();
        assert_eq!(LanguageCode::parse_or(Some("??"), &default), default);
        assert_eq!(LanguageCode::parse_or(None, &default), default);
        assert_eq!(LanguageCode::parse_or(Some("en"), &default).as_str(), "en");
    }

    #[test]
    fn deserialize_validates() {
        let ok: Result<LanguageCode, _> = serde_json::from_str("\"FR\"");
        assert_eq!(ok.unwrap().as_str(), "fr");
        let bad: Result<LanguageCode, _> = serde_json::from_str("\"1234\"");
        assert!(bad.is_err());
    }
}
