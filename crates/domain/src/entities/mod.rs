//! Domain entities - weather data as it flows through one request

mod current_conditions;
mod daily_summary;
mod weather_sample;

pub use current_conditions::{CurrentConditions, NO_DESCRIPTION};
pub use daily_summary::DailySummary;
pub use weather_sample::{SampleCondition, WeatherSample};
