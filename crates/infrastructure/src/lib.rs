//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer and owns the
//! process-level concerns: configuration loading, the weather cache,
//! logging setup and page templates.

pub mod adapters;
pub mod cache;
pub mod config;
pub mod telemetry;
pub mod templates;

pub use adapters::*;
pub use cache::{InMemoryWeatherCache, TtlCache};
pub use config::{AppConfig, CacheConfig, LogFormat, ServerConfig, WeatherConfig};
pub use telemetry::{TelemetryConfig, TelemetryError, init_telemetry};
pub use templates::{TemplateEngine, TemplateError, WeatherPage};
