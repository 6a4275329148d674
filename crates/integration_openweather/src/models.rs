//! OpenWeather wire models
//!
//! Raw response shapes of the `/weather` and `/forecast` endpoints. Every
//! field is optional so partial payloads deserialize instead of failing.

use serde::{Deserialize, Serialize};

/// Response of `GET /weather`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentResponse {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub main: Option<MainReadings>,
    #[serde(default)]
    pub weather: Option<Vec<ConditionEntry>>,
    #[serde(default)]
    pub wind: Option<Wind>,
    #[serde(default)]
    pub sys: Option<Sys>,
    /// Shift in seconds from UTC
    #[serde(default)]
    pub timezone: Option<i64>,
    /// Observation time, Unix epoch seconds
    #[serde(default)]
    pub dt: Option<i64>,
}

/// The `main` block shared by both endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MainReadings {
    #[serde(default)]
    pub temp: Option<f64>,
    #[serde(default)]
    pub feels_like: Option<f64>,
    #[serde(default)]
    pub temp_min: Option<f64>,
    #[serde(default)]
    pub temp_max: Option<f64>,
    #[serde(default)]
    pub pressure: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
}

/// One entry of the `weather` array
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConditionEntry {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    #[serde(default)]
    pub speed: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sys {
    #[serde(default)]
    pub country: Option<String>,
}

/// Response of `GET /forecast` (5 days in 3-hour steps)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub list: Option<Vec<ForecastEntry>>,
}

/// One 3-hour forecast step
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    #[serde(default)]
    pub dt: Option<i64>,
    /// `YYYY-MM-DD HH:MM:SS` in UTC
    #[serde(default)]
    pub dt_txt: Option<String>,
    #[serde(default)]
    pub main: Option<MainReadings>,
    #[serde(default)]
    pub weather: Option<Vec<ConditionEntry>>,
    /// Probability of precipitation, 0..1
    #[serde(default)]
    pub pop: Option<f64>,
}
