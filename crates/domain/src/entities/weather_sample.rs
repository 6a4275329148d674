//! Raw forecast sample
//!
//! One 3-hour data point as delivered by the provider, with every field
//! optional. Samples are consumed once by the forecast summarizer.

use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// Weather condition attached to a sample (first condition entry only)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleCondition {
    pub description: String,
    pub icon: String,
}

/// One timestamped forecast data point
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherSample {
    /// Textual timestamp, `YYYY-MM-DD HH:MM:SS`
    pub timestamp: Option<String>,
    /// Unix epoch seconds (UTC)
    pub epoch: Option<i64>,
    /// Minimum temperature over the interval
    pub temp_min: Option<f64>,
    /// Maximum temperature over the interval
    pub temp_max: Option<f64>,
    /// Probability of precipitation, 0..1
    pub pop: Option<f64>,
    pub condition: Option<SampleCondition>,
}

impl WeatherSample {
    /// Calendar day this sample belongs to, as `YYYY-MM-DD`
    ///
    /// The textual timestamp wins; otherwise the epoch is converted to a UTC
    /// date. Returns `None` when neither yields a date.
    #[must_use]
    pub fn day_key(&self) -> Option<String> {
        if let Some(text) = self.timestamp.as_deref().filter(|t| !t.is_empty()) {
            return Some(text.chars().take(10).collect());
        }

        let epoch = self.epoch?;
        DateTime::from_timestamp(epoch, 0).map(|dt| dt.date_naive().format("%Y-%m-%d").to_string())
    }
}
