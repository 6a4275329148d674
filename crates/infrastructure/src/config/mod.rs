//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings and log format
//! - `weather`: OpenWeather credentials, endpoint and request defaults
//! - `cache`: Weather cache TTL

mod cache;
mod server;
mod weather;

use serde::{Deserialize, Serialize};

pub use cache::CacheConfig;
pub use server::{LogFormat, ServerConfig};
pub use weather::WeatherConfig;

/// Prefix of structured environment overrides, e.g. `WEATHERDESK_SERVER__PORT`
pub const ENV_PREFIX: &str = "WEATHERDESK";

/// Conventional variables honoured on top of the prefixed ones
const CONVENTIONAL_VARS: [(&str, &str); 3] = [
    ("OPENWEATHER_API_KEY", "weather.api_key"),
    ("DEFAULT_UNITS", "weather.default_units"),
    ("DEFAULT_LANG", "weather.default_lang"),
];

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Weather provider configuration
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Cache configuration
    #[serde(default)]
    pub cache: CacheConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    ///
    /// Sources, lowest precedence first: built-in defaults, `config.toml`
    /// in the working directory, `WEATHERDESK_*` variables, then the
    /// conventional `OPENWEATHER_API_KEY`, `DEFAULT_UNITS` and `DEFAULT_LANG`.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be parsed or a value has the
    /// wrong type.
    pub fn load() -> Result<Self, config::ConfigError> {
        let vars: config::Map<String, String> = std::env::vars().collect();
        Self::load_from(Some("config"), &vars)
    }

    /// Load configuration from an optional file and an explicit variable set
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be parsed or a value has the
    /// wrong type.
    pub fn load_from(
        file: Option<&str>,
        vars: &config::Map<String, String>,
    ) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("cache.ttl_secs", 300)?;

        // Load from file if exists
        if let Some(file) = file {
            builder = builder.add_source(config::File::with_name(file).required(false));
        }

        // Override with environment variables (e.g., WEATHERDESK_SERVER__PORT)
        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(Some(vars.clone())),
        );

        for (var, key) in CONVENTIONAL_VARS {
            if let Some(value) = vars.get(var).filter(|v| !v.trim().is_empty()) {
                builder = builder.set_override(key, value.as_str())?;
            }
        }

        let config = builder.build()?;
        config.try_deserialize()
    }
}
