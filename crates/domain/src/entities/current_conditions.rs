//! Normalized current weather conditions

use serde::{Deserialize, Serialize};

use crate::value_objects::Units;

/// Description used when the provider reports no weather condition
///
/// Applied once during normalization, so the page and the JSON API both show it.
pub const NO_DESCRIPTION: &str = "No description";

/// Current conditions for one city, reduced to what the UI displays
///
/// Numeric fields stay optional: a partial upstream payload yields `None`
/// rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Display name, `"{name}, {country}"` or just the name
    pub city: String,
    pub temp: Option<f64>,
    pub feels_like: Option<f64>,
    /// Relative humidity in percent
    pub humidity: Option<f64>,
    /// Pressure in hPa
    pub pressure: Option<f64>,
    pub desc: String,
    pub icon: Option<String>,
    pub wind_speed: Option<f64>,
    pub units: Units,
    /// Offset of the city's local time from UTC, in seconds
    pub tz_offset: Option<i64>,
    /// Observation time, Unix epoch seconds
    pub dt: Option<i64>,
}

impl CurrentConditions {
    /// Compose the display label from a city name and optional country code
    #[must_use]
    pub fn city_label(name: &str, country: Option<&str>) -> String {
        match country.map(str::trim).filter(|c| !c.is_empty()) {
            Some(country) => format!("{name}, {country}"),
            None => name.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_label_with_country() {
        assert_eq!(CurrentConditions::city_label("Madrid", Some("ES")), "Madrid, ES");
    }

    #[test]
    fn city_label_without_country() {
        assert_eq!(CurrentConditions::city_label("Madrid", None), "Madrid");
        assert_eq!(CurrentConditions::city_label("Madrid", Some("")), "Madrid");
    }

    #[test]
    fn serializes_units_tag() {
        let conditions = CurrentConditions {
            city: "Quito, EC".to_string(),
            temp: Some(14.2),
            feels_like: None,
            humidity: Some(80.0),
            pressure: Some(1020.0),
            desc: NO_DESCRIPTION.to_string(),
            icon: None,
            wind_speed: None,
            units: Units::Imperial,
            tz_offset: Some(-18_000),
            dt: Some(1_704_067_200),
        };
        let json = serde_json::to_value(&conditions).unwrap();
        assert_eq!(json["units"], "imperial");
        assert!(json["feels_like"].is_null());
        assert_eq!(json["tz_offset"], -18_000);
    }
}
