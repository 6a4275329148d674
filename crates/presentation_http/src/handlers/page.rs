//! Server-rendered weather page

use application::{ApplicationError, WeatherRequest};
use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    response::Html,
};
use domain::{LanguageCode, Units};
use infrastructure::WeatherPage;
use tracing::{debug, instrument, warn};

use crate::{error::ApiError, state::AppState};

/// Landing page with an empty form
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let defaults = state.weather_service.defaults();
    let page = WeatherPage::new(defaults.units, &defaults.lang);
    Ok(Html(state.templates.render_weather_page(&page)?))
}

/// Form submission: current conditions plus the daily forecast
///
/// Lookup failures are shown on the page rather than returned as an error
/// status. Validation errors keep the submitted units and language in the
/// form; provider failures reset them to the configured defaults.
#[instrument(skip(state, form))]
pub async fn weather(
    State(state): State<AppState>,
    form: Result<Form<WeatherRequest>, FormRejection>,
) -> Result<Html<String>, ApiError> {
    let request = match form {
        Ok(Form(request)) => request,
        Err(rejection) => {
            debug!(error = %rejection, "Unreadable form body, treating as empty");
            WeatherRequest::default()
        },
    };

    let defaults = state.weather_service.defaults();
    let city = request.city.clone().unwrap_or_default();
    let units = Units::parse_or(request.units.as_deref(), defaults.units);
    let lang = LanguageCode::parse_or(request.lang.as_deref(), &defaults.lang);

    let page = match state.weather_service.fetch_overview(&request).await {
        Ok(overview) => WeatherPage::new(units, &lang).with_city(city).with_weather(
            overview.current,
            overview.forecast,
            overview.from_cache,
        ),
        Err(e @ ApplicationError::Domain(_)) => {
            WeatherPage::new(units, &lang).with_city(city).with_error(e.to_string())
        },
        Err(e) => {
            warn!(error = %e, "Weather lookup failed");
            WeatherPage::new(defaults.units, &defaults.lang)
                .with_city(city)
                .with_error(e.to_string())
        },
    };

    Ok(Html(state.templates.render_weather_page(&page)?))
}
