//! Cache implementations
//!
//! Provides caching adapters for the application layer:
//! - `TtlCache`: Generic expiring map with an injectable clock
//! - `InMemoryWeatherCache`: Shared `WeatherCachePort` built on `TtlCache`

mod ttl_cache;
mod weather_cache;

pub use ttl_cache::{Clock, ManualClock, SystemClock, TtlCache};
pub use weather_cache::InMemoryWeatherCache;
