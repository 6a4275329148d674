//! Application services - Use case implementations

mod weather_service;

pub use weather_service::{
    Fetched, MISSING_API_KEY, QueryDefaults, WeatherOverview, WeatherRequest, WeatherService,
};
