//! Weather lookup service
//!
//! Validates raw request input, consults the cache, calls the provider on a
//! miss and summarizes forecast samples into daily entries.

use std::sync::Arc;

use domain::{
    CurrentConditions, DailySummary, LanguageCode, Units, WeatherQuery, WeekdayLabels,
    summarize_forecast,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::{
    error::ApplicationError,
    ports::{CacheKey, CacheKind, CachedWeather, WeatherCachePort, WeatherPort},
};

/// Message reported when the provider has no API key
pub const MISSING_API_KEY: &str = "Missing OpenWeather API key";

/// Raw lookup input as submitted by a form or JSON body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeatherRequest {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub units: Option<String>,
    #[serde(default)]
    pub lang: Option<String>,
}

impl WeatherRequest {
    /// Request for a city using the configured defaults
    #[must_use]
    pub fn for_city(city: impl Into<String>) -> Self {
        Self {
            city: Some(city.into()),
            ..Self::default()
        }
    }
}

/// Fallback units and language applied when a request omits them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryDefaults {
    pub units: Units,
    pub lang: LanguageCode,
}

/// A value together with whether it was served from cache
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fetched<T> {
    pub value: T,
    pub from_cache: bool,
}

/// Current conditions and forecast fetched for one page render
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherOverview {
    pub current: CurrentConditions,
    pub forecast: Vec<DailySummary>,
    /// True when either lookup was a cache hit
    pub from_cache: bool,
}

/// Service orchestrating weather lookups
pub struct WeatherService {
    weather: Arc<dyn WeatherPort>,
    cache: Arc<dyn WeatherCachePort>,
    defaults: QueryDefaults,
}

impl std::fmt::Debug for WeatherService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherService")
            .field("defaults", &self.defaults)
            .finish_non_exhaustive()
    }
}

impl WeatherService {
    /// Create a new weather service
    #[must_use]
    pub fn new(
        weather: Arc<dyn WeatherPort>,
        cache: Arc<dyn WeatherCachePort>,
        defaults: QueryDefaults,
    ) -> Self {
        Self {
            weather,
            cache,
            defaults,
        }
    }

    /// Defaults used for requests without units or language
    #[must_use]
    pub const fn defaults(&self) -> &QueryDefaults {
        &self.defaults
    }

    /// Whether the provider has the credentials it needs
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.weather.is_configured()
    }

    /// Turn raw input into a validated query
    ///
    /// The API key is checked before the city so a misconfigured server
    /// reports that first.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if the provider has no API
    /// key, or `ApplicationError::Domain` if the city is blank.
    pub fn resolve(&self, request: &WeatherRequest) -> Result<WeatherQuery, ApplicationError> {
        if !self.is_configured() {
            return Err(ApplicationError::Configuration(MISSING_API_KEY.to_string()));
        }

        let query = WeatherQuery::from_input(
            request.city.as_deref(),
            request.units.as_deref(),
            request.lang.as_deref(),
            self.defaults.units,
            &self.defaults.lang,
        )?;
        Ok(query)
    }

    /// Fetch current conditions, from cache when fresh
    ///
    /// # Errors
    ///
    /// Returns an error if the input is invalid or the provider call fails.
    #[instrument(skip(self, request), fields(city = ?request.city))]
    pub async fn fetch_current(
        &self,
        request: &WeatherRequest,
    ) -> Result<Fetched<CurrentConditions>, ApplicationError> {
        let query = self.resolve(request)?;
        self.current_for(&query).await
    }

    /// Fetch the daily forecast summary, from cache when fresh
    ///
    /// # Errors
    ///
    /// Returns an error if the input is invalid or the provider call fails.
    #[instrument(skip(self, request), fields(city = ?request.city))]
    pub async fn fetch_forecast(
        &self,
        request: &WeatherRequest,
    ) -> Result<Fetched<Vec<DailySummary>>, ApplicationError> {
        let query = self.resolve(request)?;
        self.forecast_for(&query).await
    }

    /// Fetch both current conditions and the forecast
    ///
    /// # Errors
    ///
    /// Returns the first error encountered; the forecast is not requested if
    /// current conditions fail.
    #[instrument(skip(self, request), fields(city = ?request.city))]
    pub async fn fetch_overview(
        &self,
        request: &WeatherRequest,
    ) -> Result<WeatherOverview, ApplicationError> {
        let query = self.resolve(request)?;
        let current = self.current_for(&query).await?;
        let forecast = self.forecast_for(&query).await?;

        Ok(WeatherOverview {
            current: current.value,
            forecast: forecast.value,
            from_cache: current.from_cache || forecast.from_cache,
        })
    }

    async fn current_for(
        &self,
        query: &WeatherQuery,
    ) -> Result<Fetched<CurrentConditions>, ApplicationError> {
        let key = CacheKey::new(CacheKind::Current, query);
        if let Some(CachedWeather::Current(value)) = self.cache.get(&key) {
            debug!(%key, "Cache hit");
            return Ok(Fetched {
                value,
                from_cache: true,
            });
        }

        let value = self.weather.current_conditions(query).await?;
        info!(%key, city = %value.city, "Fetched current conditions");
        self.cache.set(key, CachedWeather::Current(value.clone()));

        Ok(Fetched {
            value,
            from_cache: false,
        })
    }

    async fn forecast_for(
        &self,
        query: &WeatherQuery,
    ) -> Result<Fetched<Vec<DailySummary>>, ApplicationError> {
        let key = CacheKey::new(CacheKind::Forecast, query);
        if let Some(CachedWeather::Forecast(value)) = self.cache.get(&key) {
            debug!(%key, "Cache hit");
            return Ok(Fetched {
                value,
                from_cache: true,
            });
        }

        let samples = self.weather.forecast_samples(query).await?;
        let value = summarize_forecast(&samples, WeekdayLabels::for_language(&query.lang));
        info!(
            %key,
            samples = samples.len(),
            days = value.len(),
            "Summarized forecast"
        );
        self.cache.set(key, CachedWeather::Forecast(value.clone()));

        Ok(Fetched {
            value,
            from_cache: false,
        })
    }
}
