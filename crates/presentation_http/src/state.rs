//! Application state shared across handlers

use std::sync::Arc;

use application::WeatherService;
use infrastructure::TemplateEngine;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Weather lookups with caching
    pub weather_service: Arc<WeatherService>,
    /// Page templates
    pub templates: Arc<TemplateEngine>,
}
