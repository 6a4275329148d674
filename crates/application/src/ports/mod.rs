//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod weather_cache_port;
mod weather_port;

pub use weather_cache_port::{CacheKey, CacheKind, CachedWeather, WeatherCachePort};
#[cfg(test)]
pub use weather_port::MockWeatherPort;
pub use weather_port::WeatherPort;
