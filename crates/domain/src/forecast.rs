//! Forecast summarization
//!
//! Reduces the provider's 3-hour forecast samples to one [`DailySummary`]
//! per calendar day:
//!
//! - samples are grouped by their `YYYY-MM-DD` day key, days in ascending order
//! - `temp_min`/`temp_max` are the extremes of the interval values (1 decimal)
//! - description and icon are the most frequent non-empty values, ties going
//!   to whichever appeared first
//! - `pop` is the mean precipitation probability (2 decimals), missing values
//!   counting as 0
//!
//! Days without both a minimum and a maximum temperature are skipped, and the
//! output is capped at the provider's 5-day horizon.
//!
//! # Example
//!
//! ```
//! use domain::forecast::{WeekdayLabels, summarize_forecast};
//! use domain::WeatherSample;
//!
//! let samples = vec![WeatherSample {
//!     timestamp: Some("2024-01-01 12:00:00".to_string()),
//!     temp_min: Some(9.96),
//!     temp_max: Some(14.04),
//!     ..Default::default()
//! }];
//!
//! let days = summarize_forecast(&samples, WeekdayLabels::SPANISH);
//! assert_eq!(days[0].day, "Lun 01");
//! assert!((days[0].temp_min - 10.0).abs() < f64::EPSILON);
//! ```

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::entities::{DailySummary, WeatherSample};
use crate::value_objects::LanguageCode;

/// Number of days the provider's 5-day/3-hour forecast covers
pub const MAX_FORECAST_DAYS: usize = 5;

/// Weekday abbreviations, Monday first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekdayLabels([&'static str; 7]);

impl WeekdayLabels {
    pub const SPANISH: Self = Self(["Lun", "Mar", "Mié", "Jue", "Vie", "Sáb", "Dom"]);
    pub const ENGLISH: Self = Self(["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);

    /// Table for a response language; anything other than English gets Spanish
    #[must_use]
    pub fn for_language(lang: &LanguageCode) -> Self {
        match lang.primary() {
            "en" => Self::ENGLISH,
            _ => Self::SPANISH,
        }
    }

    /// Abbreviation for a date
    #[must_use]
    pub fn weekday(&self, date: NaiveDate) -> &'static str {
        self.0[date.weekday().num_days_from_monday() as usize]
    }

    /// Short label for a day key, e.g. `Lun 06`
    ///
    /// Falls back to the bare day-of-month if the key is not a valid date.
    #[must_use]
    pub fn label(&self, day_key: &str) -> String {
        let day_of_month: String = {
            let chars: Vec<char> = day_key.chars().collect();
            chars[chars.len().saturating_sub(2)..].iter().collect()
        };

        match NaiveDate::parse_from_str(day_key, "%Y-%m-%d") {
            Ok(date) => format!("{} {day_of_month}", self.weekday(date)),
            Err(_) => day_of_month,
        }
    }
}

impl Default for WeekdayLabels {
    fn default() -> Self {
        Self::SPANISH
    }
}

/// Summarize raw forecast samples into at most [`MAX_FORECAST_DAYS`] days
#[must_use]
pub fn summarize_forecast(samples: &[WeatherSample], labels: WeekdayLabels) -> Vec<DailySummary> {
    let mut by_day: BTreeMap<String, Vec<&WeatherSample>> = BTreeMap::new();
    for sample in samples {
        if let Some(key) = sample.day_key() {
            by_day.entry(key).or_default().push(sample);
        }
    }

    by_day
        .iter()
        .filter_map(|(day_key, group)| summarize_day(day_key, group, labels))
        .take(MAX_FORECAST_DAYS)
        .collect()
}

fn summarize_day(
    day_key: &str,
    group: &[&WeatherSample],
    labels: WeekdayLabels,
) -> Option<DailySummary> {
    let mins: Vec<f64> = group.iter().filter_map(|s| s.temp_min).collect();
    let maxs: Vec<f64> = group.iter().filter_map(|s| s.temp_max).collect();
    if mins.is_empty() || maxs.is_empty() {
        return None;
    }

    let pops: Vec<f64> = group.iter().map(|s| s.pop.unwrap_or(0.0)).collect();
    let conditions: Vec<_> = group.iter().filter_map(|s| s.condition.as_ref()).collect();
    let descs = conditions.iter().map(|c| c.description.as_str());
    let icons = conditions.iter().map(|c| c.icon.as_str());

    let temp_min = mins.iter().copied().fold(f64::INFINITY, f64::min);
    let temp_max = maxs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    #[allow(clippy::cast_precision_loss)]
    let pop = round_to(pops.iter().sum::<f64>() / pops.len() as f64, 2);

    Some(DailySummary {
        date: day_key.to_string(),
        day: labels.label(day_key),
        temp_min: round_to(temp_min, 1),
        temp_max: round_to(temp_max, 1),
        desc: most_frequent(descs).unwrap_or_default().to_string(),
        icon: most_frequent(icons).map(str::to_string),
        pop,
    })
}

/// Most common non-empty value; the earliest one wins a tie
fn most_frequent<'a>(values: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for value in values.filter(|v| !v.is_empty()) {
        match counts.iter_mut().find(|(seen, _)| *seen == value) {
            Some((_, count)) => *count += 1,
            None => counts.push((value, 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (value, count) in counts {
        if best.is_none_or(|(_, top)| count > top) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value)
}

/// Rounds half to even, so 12.25 becomes 12.2 and 0.125 becomes 0.12
fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}
