//! Weather lookup parameters

use serde::Serialize;

use super::{CityName, LanguageCode, Units};
use crate::errors::DomainError;

/// A validated request for weather data: which city, in which units and language
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct WeatherQuery {
    pub city: CityName,
    pub units: Units,
    pub lang: LanguageCode,
}

impl WeatherQuery {
    /// Build a query from already validated parts
    #[must_use]
    pub const fn new(city: CityName, units: Units, lang: LanguageCode) -> Self {
        Self { city, units, lang }
    }

    /// Build a query from raw request input
    ///
    /// Units and language fall back to the supplied defaults when missing or
    /// unrecognised; only the city is mandatory.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::CityRequired` if the city is blank.
    pub fn from_input(
        city: Option<&str>,
        units: Option<&str>,
        lang: Option<&str>,
        default_units: Units,
        default_lang: &LanguageCode,
    ) -> Result<Self, DomainError> {
        let city = CityName::new(city.unwrap_or_default())?;
        Ok(Self {
            city,
            units: Units::parse_or(units, default_units),
            lang: LanguageCode::parse_or(lang, default_lang),
        })
    }
}
