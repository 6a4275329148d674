//! OpenWeather client
//!
//! HTTP client for the OpenWeather 2.5 REST API.

use std::time::Duration;

use async_trait::async_trait;
use domain::{CurrentConditions, WeatherQuery, WeatherSample};
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::{
    models::{CurrentResponse, ForecastResponse},
    normalize,
};

/// Message used when an error payload carries no `message` field
pub const NO_DETAILS: &str = "no details";

/// OpenWeather client errors
#[derive(Debug, Error)]
pub enum OpenWeatherError {
    /// No API key configured
    #[error("Missing OpenWeather API key")]
    MissingApiKey,

    /// The HTTP client could not be built
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Network failure or timeout
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Non-success status from the API
    #[error("Upstream API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Success status but a body that is not the expected JSON
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// OpenWeather client configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct OpenWeatherConfig {
    /// API key sent as `appid`; empty means unconfigured
    #[serde(default, skip_serializing)]
    pub api_key: String,

    /// API base URL (default: <https://api.openweathermap.org/data/2.5>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl std::fmt::Debug for OpenWeatherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

const fn default_timeout() -> u64 {
    10
}

impl Default for OpenWeatherConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Weather client trait for fetching provider data
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Get current conditions for a city
    async fn get_current(
        &self,
        query: &WeatherQuery,
    ) -> Result<CurrentConditions, OpenWeatherError>;

    /// Get the 3-hour forecast samples for a city
    async fn get_forecast(
        &self,
        query: &WeatherQuery,
    ) -> Result<Vec<WeatherSample>, OpenWeatherError>;

    /// Whether an API key is configured
    fn has_api_key(&self) -> bool;
}

/// OpenWeather HTTP client implementation
#[derive(Debug)]
pub struct OpenWeatherClient {
    client: Client,
    config: OpenWeatherConfig,
}

impl OpenWeatherClient {
    /// Create a new OpenWeather client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: OpenWeatherConfig) -> Result<Self, OpenWeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| OpenWeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn endpoint(&self, name: &str) -> String {
        format!("{}/{name}", self.config.base_url.trim_end_matches('/'))
    }

    /// Issue a GET with the standard query parameters
    async fn get(&self, name: &str, query: &WeatherQuery) -> Result<Response, OpenWeatherError> {
        if !self.has_api_key() {
            return Err(OpenWeatherError::MissingApiKey);
        }

        let url = self.endpoint(name);
        debug!(url = %url, "Calling OpenWeather");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", query.city.as_str()),
                ("appid", self.config.api_key.as_str()),
                ("units", query.units.as_str()),
                ("lang", query.lang.as_str()),
            ])
            .send()
            .await
            .map_err(|e| OpenWeatherError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.text().await {
                Ok(body) => error_message(&body),
                Err(e) => {
                    debug!(error = %e, "Failed to read error body");
                    NO_DETAILS.to_string()
                },
            };
            return Err(OpenWeatherError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }
}

/// Best-effort extraction of a human readable message from an error body
///
/// JSON objects yield their `message` field (or [`NO_DETAILS`]); anything else
/// is reported verbatim, and an empty body becomes [`NO_DETAILS`].
#[must_use]
pub fn error_message(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::Object(map)) => match map.get("message") {
            Some(serde_json::Value::String(message)) => message.clone(),
            Some(serde_json::Value::Null) | None => NO_DETAILS.to_string(),
            Some(other) => other.to_string(),
        },
        _ if body.trim().is_empty() => NO_DETAILS.to_string(),
        _ => body.to_string(),
    }
}

#[async_trait]
impl WeatherClient for OpenWeatherClient {
    #[instrument(skip(self, query), fields(city = %query.city.as_str(), units = %query.units))]
    async fn get_current(
        &self,
        query: &WeatherQuery,
    ) -> Result<CurrentConditions, OpenWeatherError> {
        let raw: CurrentResponse = self
            .get("weather", query)
            .await?
            .json()
            .await
            .map_err(|e| OpenWeatherError::ParseError(e.to_string()))?;

        Ok(normalize::current_conditions(
            &raw,
            query.city.as_str(),
            query.units,
        ))
    }

    #[instrument(skip(self, query), fields(city = %query.city.as_str(), units = %query.units))]
    async fn get_forecast(
        &self,
        query: &WeatherQuery,
    ) -> Result<Vec<WeatherSample>, OpenWeatherError> {
        let raw: ForecastResponse = self
            .get("forecast", query)
            .await?
            .json()
            .await
            .map_err(|e| OpenWeatherError::ParseError(e.to_string()))?;

        let samples = normalize::forecast_samples(&raw);
        debug!(count = samples.len(), "Received forecast samples");
        Ok(samples)
    }

    fn has_api_key(&self) -> bool {
        !self.config.api_key.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = OpenWeatherConfig::default();
        assert_eq!(config.base_url, "https://api.openweathermap.org/data/2.5");
        assert_eq!(config.timeout_secs, 10);
        assert!(config.api_key.is_empty());
    }

    #[test]
    fn test_config_debug_redacts_key() {
        let config = OpenWeatherConfig {
            api_key: "super-secret".to_string(),
            ..Default::default()
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = OpenWeatherClient::new(OpenWeatherConfig {
            base_url: "http://localhost:9000/".to_string(),
            ..Default::default()
        })
        .expect("client creation should succeed");
        assert_eq!(client.endpoint("weather"), "http://localhost:9000/weather");
    }

    #[test]
    fn test_has_api_key() {
        let client = OpenWeatherClient::new(OpenWeatherConfig::default())
            .expect("client creation should succeed");
        assert!(!client.has_api_key());

        let client = OpenWeatherClient::new(OpenWeatherConfig {
            api_key: "abc".to_string(),
            ..Default::default()
        })
        .expect("client creation should succeed");
        assert!(client.has_api_key());
    }

    #[test]
    fn test_error_message_from_json() {
        assert_eq!(
            error_message(r#"{"cod":"404","message":"city not found"}"#),
            "city not found"
        );
    }

    #[test]
    fn test_error_message_without_message_field() {
        assert_eq!(error_message(r#"{"cod":"500"}"#), NO_DETAILS);
    }

    #[test]
    fn test_error_message_raw_body() {
        assert_eq!(error_message("Bad Gateway"), "Bad Gateway");
    }

    #[test]
    fn test_error_message_empty_body() {
        assert_eq!(error_message(""), NO_DETAILS);
        assert_eq!(error_message("  \n"), NO_DETAILS);
    }

    #[test]
    fn test_error_display() {
        let err = OpenWeatherError::Api {
            status: 401,
            message: "Invalid API key".to_string(),
        };
        assert_eq!(err.to_string(), "Upstream API error (401): Invalid API key");
    }
}
