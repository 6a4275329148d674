//! OpenWeather provider configuration.

use application::QueryDefaults;
use domain::{LanguageCode, Units};
use integration_openweather::OpenWeatherConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// OpenWeather service configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// API key (sensitive - uses `SecretString`)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// OpenWeather API base URL
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_weather_timeout")]
    pub timeout_secs: u64,

    /// Units used when a request names none (`metric` or `imperial`)
    #[serde(default = "default_units")]
    pub default_units: String,

    /// Language used when a request names none
    #[serde(default = "default_lang")]
    pub default_lang: String,
}

impl std::fmt::Debug for WeatherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("default_units", &self.default_units)
            .field("default_lang", &self.default_lang)
            .finish()
    }
}

fn default_weather_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

const fn default_weather_timeout() -> u64 {
    10
}

fn default_units() -> String {
    Units::Metric.as_str().to_string()
}

fn default_lang() -> String {
    LanguageCode::spanish().as_str().to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_weather_base_url(),
            timeout_secs: default_weather_timeout(),
            default_units: default_units(),
            default_lang: default_lang(),
        }
    }
}

impl WeatherConfig {
    /// Get the API key as a string reference, if one is set
    #[must_use]
    pub fn api_key_str(&self) -> Option<&str> {
        self.api_key
            .as_ref()
            .map(ExposeSecret::expose_secret)
            .filter(|key| !key.trim().is_empty())
    }

    /// Default units, falling back to metric when the setting is unrecognised
    #[must_use]
    pub fn units(&self) -> Units {
        Units::parse_or(Some(self.default_units.as_str()), Units::Metric)
    }

    /// Default language, falling back to Spanish when the setting is invalid
    #[must_use]
    pub fn language(&self) -> LanguageCode {
        LanguageCode::parse_or(Some(self.default_lang.as_str()), &LanguageCode::spanish())
    }

    /// Request defaults handed to the weather service
    #[must_use]
    pub fn query_defaults(&self) -> QueryDefaults {
        QueryDefaults {
            units: self.units(),
            lang: self.language(),
        }
    }

    /// Convert to `integration_openweather`'s `OpenWeatherConfig`
    #[must_use]
    pub fn to_openweather_config(&self) -> OpenWeatherConfig {
        OpenWeatherConfig {
            api_key: self.api_key_str().unwrap_or_default().to_string(),
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}
