//! Weatherdesk HTTP Server
//!
//! Main entry point for the weather page and JSON API.

use std::sync::Arc;

use anyhow::Context;
use application::{WeatherService, ports::WeatherCachePort};
use infrastructure::{
    AppConfig, InMemoryWeatherCache, OpenWeatherAdapter, TelemetryConfig, TemplateEngine,
    init_telemetry,
};
use presentation_http::{
    SecurityHeadersLayer, routes,
    shutdown::{serve_with_shutdown, shutdown_signal},
    state::AppState,
    tasks::spawn_cache_purge_task,
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    init_telemetry(&TelemetryConfig::with_format(config.server.log_format))?;

    info!("🌦️ Weatherdesk v{} starting...", env!("CARGO_PKG_VERSION"));
    info!(
        host = %config.server.host,
        port = %config.server.port,
        units = %config.weather.units(),
        lang = %config.weather.language(),
        cache_ttl_secs = config.cache.effective_ttl().as_secs(),
        "Configuration loaded"
    );

    if config.weather.api_key_str().is_none() {
        warn!("OPENWEATHER_API_KEY is not set; lookups will fail until it is configured");
    }

    // Initialize adapters
    let weather = OpenWeatherAdapter::with_config(config.weather.to_openweather_config())
        .map_err(|e| anyhow::anyhow!("Failed to initialize weather client: {e}"))?;
    let cache: Arc<dyn WeatherCachePort> =
        Arc::new(InMemoryWeatherCache::from_config(&config.cache));
    let templates = TemplateEngine::new().context("Failed to load templates")?;

    // Initialize services
    let weather_service = WeatherService::new(
        Arc::new(weather),
        Arc::clone(&cache),
        config.weather.query_defaults(),
    );

    let purge_handle = config
        .cache
        .purge_interval()
        .map(|interval| spawn_cache_purge_task(cache, interval));

    let state = AppState {
        weather_service: Arc::new(weather_service),
        templates: Arc::new(templates),
    };

    // Build router
    let app = routes::create_router(state);

    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Add middleware (order matters: first added = outermost)
    let app = app
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .layer(SecurityHeadersLayer::new());

    // Start server
    let addr = config.server.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("🚀 Server listening on http://{}", addr);

    serve_with_shutdown(
        listener,
        app,
        shutdown_signal(),
        config.server.shutdown_timeout(),
    )
    .await?;

    if let Some(handle) = purge_handle {
        handle.abort();
    }

    info!("👋 Server shutdown complete");

    Ok(())
}
