//! JSON weather endpoints

use application::WeatherRequest;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use domain::{CurrentConditions, DailySummary};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{error::ApiError, state::AppState};

/// Current conditions response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherResponse {
    pub result: CurrentConditions,
    pub from_cache: bool,
}

/// Daily forecast response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub forecast5: Vec<DailySummary>,
    pub from_cache: bool,
}

/// Request body, or an empty request when the body is missing or not JSON
fn request_or_default(payload: Result<Json<WeatherRequest>, JsonRejection>) -> WeatherRequest {
    match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            debug!(error = %rejection, "Unreadable JSON body, treating as empty");
            WeatherRequest::default()
        },
    }
}

/// Current conditions for a city
#[instrument(skip(state, payload))]
pub async fn current_weather(
    State(state): State<AppState>,
    payload: Result<Json<WeatherRequest>, JsonRejection>,
) -> Result<Json<WeatherResponse>, ApiError> {
    let request = request_or_default(payload);
    let fetched = state.weather_service.fetch_current(&request).await?;

    Ok(Json(WeatherResponse {
        result: fetched.value,
        from_cache: fetched.from_cache,
    }))
}

/// Five-day daily summary for a city
#[instrument(skip(state, payload))]
pub async fn forecast(
    State(state): State<AppState>,
    payload: Result<Json<WeatherRequest>, JsonRejection>,
) -> Result<Json<ForecastResponse>, ApiError> {
    let request = request_or_default(payload);
    let fetched = state.weather_service.fetch_forecast(&request).await?;

    Ok(Json(ForecastResponse {
        forecast5: fetched.value,
        from_cache: fetched.from_cache,
    }))
}
