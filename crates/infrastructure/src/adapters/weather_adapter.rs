//! Weather adapter - Implements WeatherPort using integration_openweather

use application::{MISSING_API_KEY, error::ApplicationError, ports::WeatherPort};
use async_trait::async_trait;
use domain::{CurrentConditions, WeatherQuery, WeatherSample};
use integration_openweather::{
    OpenWeatherClient, OpenWeatherConfig, OpenWeatherError, WeatherClient,
};
use tracing::{debug, instrument};

/// Adapter for weather services using the OpenWeather API
pub struct OpenWeatherAdapter {
    client: Box<dyn WeatherClient>,
}

impl std::fmt::Debug for OpenWeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherAdapter")
            .field("client", &"OpenWeatherClient")
            .field("configured", &self.client.has_api_key())
            .finish()
    }
}

impl OpenWeatherAdapter {
    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: OpenWeatherConfig) -> Result<Self, ApplicationError> {
        let client = OpenWeatherClient::new(config).map_err(Self::map_error)?;
        Ok(Self::with_client(Box::new(client)))
    }

    /// Wrap an existing client
    #[must_use]
    pub fn with_client(client: Box<dyn WeatherClient>) -> Self {
        Self { client }
    }

    /// Map integration weather error to application error
    fn map_error(err: OpenWeatherError) -> ApplicationError {
        match err {
            OpenWeatherError::MissingApiKey => {
                ApplicationError::Configuration(MISSING_API_KEY.to_string())
            },
            OpenWeatherError::Api { status, message } => {
                ApplicationError::Upstream { status, message }
            },
            OpenWeatherError::RequestFailed(e) | OpenWeatherError::ParseError(e) => {
                ApplicationError::ExternalService(e)
            },
            OpenWeatherError::ConnectionFailed(e) => ApplicationError::Internal(e),
        }
    }
}

#[async_trait]
impl WeatherPort for OpenWeatherAdapter {
    #[instrument(skip(self, query), fields(city = %query.city.as_str()))]
    async fn current_conditions(
        &self,
        query: &WeatherQuery,
    ) -> Result<CurrentConditions, ApplicationError> {
        let result = self.client.get_current(query).await.map_err(Self::map_error);

        match &result {
            Ok(current) => {
                debug!(
                    temperature = ?current.temp,
                    desc = %current.desc,
                    "Retrieved current weather"
                );
            },
            Err(e) => {
                debug!(error = %e, "Failed to get current weather");
            },
        }

        result
    }

    #[instrument(skip(self, query), fields(city = %query.city.as_str()))]
    async fn forecast_samples(
        &self,
        query: &WeatherQuery,
    ) -> Result<Vec<WeatherSample>, ApplicationError> {
        let result = self.client.get_forecast(query).await.map_err(Self::map_error);

        match &result {
            Ok(samples) => {
                debug!(samples = samples.len(), "Retrieved weather forecast");
            },
            Err(e) => {
                debug!(error = %e, "Failed to get weather forecast");
            },
        }

        result
    }

    fn is_configured(&self) -> bool {
        self.client.has_api_key()
    }
}
