//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Server-rendered page
        .route("/", get(handlers::page::index))
        .route("/weather", post(handlers::page::weather))
        // JSON API
        .route("/api/weather", post(handlers::weather_api::current_weather))
        .route("/api/forecast", post(handlers::weather_api::forecast))
        // Attach state
        .with_state(state)
}
