//! Mapping from OpenWeather payloads to domain types

use domain::{CurrentConditions, NO_DESCRIPTION, SampleCondition, Units, WeatherSample};

use crate::models::{ConditionEntry, CurrentResponse, ForecastEntry, ForecastResponse};

/// Reduce a `/weather` payload to the fields the UI displays
///
/// `requested_city` labels the result when the payload carries no name.
#[must_use]
pub fn current_conditions(
    raw: &CurrentResponse,
    requested_city: &str,
    units: Units,
) -> CurrentConditions {
    let name = raw
        .name
        .as_deref()
        .filter(|n| !n.is_empty())
        .unwrap_or(requested_city);
    let country = raw.sys.as_ref().and_then(|s| s.country.as_deref());
    let main = raw.main.clone().unwrap_or_default();
    let condition = first_condition(raw.weather.as_deref());

    CurrentConditions {
        city: CurrentConditions::city_label(name, country),
        temp: main.temp,
        feels_like: main.feels_like,
        humidity: main.humidity,
        pressure: main.pressure,
        desc: condition
            .and_then(|c| c.description.clone())
            .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        icon: condition.and_then(|c| c.icon.clone()),
        wind_speed: raw.wind.as_ref().and_then(|w| w.speed),
        units,
        tz_offset: raw.timezone,
        dt: raw.dt,
    }
}

/// Flatten a `/forecast` payload into summarizer input
#[must_use]
pub fn forecast_samples(raw: &ForecastResponse) -> Vec<WeatherSample> {
    raw.list
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(sample)
        .collect()
}

fn sample(entry: &ForecastEntry) -> WeatherSample {
    let main = entry.main.as_ref();
    WeatherSample {
        timestamp: entry.dt_txt.clone(),
        epoch: entry.dt,
        temp_min: main.and_then(|m| m.temp_min),
        temp_max: main.and_then(|m| m.temp_max),
        pop: entry.pop,
        condition: first_condition(entry.weather.as_deref()).map(|c| SampleCondition {
            description: c.description.clone().unwrap_or_default(),
            icon: c.icon.clone().unwrap_or_default(),
        }),
    }
}

fn first_condition(entries: Option<&[ConditionEntry]>) -> Option<&ConditionEntry> {
    entries.and_then(<[ConditionEntry]>::first)
}
