//! OpenWeather integration
//!
//! Client for the OpenWeather REST API (<https://openweathermap.org/api>).
//! Provides current conditions and the 5 day / 3 hour forecast for a city,
//! mapped onto domain types.

pub mod client;
mod models;
pub mod normalize;

pub use client::{
    NO_DETAILS, OpenWeatherClient, OpenWeatherConfig, OpenWeatherError, WeatherClient,
    error_message,
};
pub use models::{
    ConditionEntry, CurrentResponse, ForecastEntry, ForecastResponse, MainReadings, Sys, Wind,
};
