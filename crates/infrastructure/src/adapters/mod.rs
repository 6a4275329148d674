//! Adapters implementing application ports
//!
//! - `OpenWeatherAdapter`: `WeatherPort` backed by the OpenWeather REST API

mod weather_adapter;

pub use weather_adapter::OpenWeatherAdapter;
