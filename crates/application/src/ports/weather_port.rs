//! Weather service port
//!
//! Defines the interface for weather data retrieval.

use async_trait::async_trait;
use domain::{CurrentConditions, WeatherQuery, WeatherSample};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for weather provider operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Get current conditions for the queried city
    async fn current_conditions(
        &self,
        query: &WeatherQuery,
    ) -> Result<CurrentConditions, ApplicationError>;

    /// Get the raw 3-hour forecast samples for the queried city
    async fn forecast_samples(
        &self,
        query: &WeatherQuery,
    ) -> Result<Vec<WeatherSample>, ApplicationError>;

    /// Whether the provider has the credentials it needs
    fn is_configured(&self) -> bool;
}
