//! Template engine for the weather page
//!
//! Uses Tera with templates embedded at compile time. HTML templates are
//! auto-escaped, so provider text and user input never reach the page raw.
//!
//! Custom filters:
//! - `temp_unit`: units tag (`metric`/`imperial`) to `°C`/`°F`
//! - `wind_unit`: units tag to `m/s`/`mph`
//! - `percent`: probability in `[0, 1]` to a whole percentage
//!
//! # Example
//!
//! ```rust,ignore
//! use infrastructure::templates::{TemplateEngine, WeatherPage};
//!
//! let engine = TemplateEngine::new()?;
//! let page = WeatherPage::new(Units::Metric, &LanguageCode::spanish());
//! let html = engine.render_weather_page(&page)?;
//! ```

use std::{collections::HashMap, sync::Arc};

use domain::{CurrentConditions, DailySummary, LanguageCode, Units};
use serde::Serialize;
use tera::{Context, Tera, Value};
use thiserror::Error;
use tracing::debug;

/// Name of the weather page template
pub const WEATHER_PAGE: &str = "weather/index.html";

/// Error type for template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template not found
    #[error("Template not found: {0}")]
    NotFound(String),

    /// Template rendering failed
    #[error("Template rendering failed: {0}")]
    Render(String),

    /// Template compilation failed
    #[error("Template compilation failed: {0}")]
    Compile(String),

    /// Invalid template context
    #[error("Invalid context: {0}")]
    Context(String),
}

impl From<tera::Error> for TemplateError {
    fn from(e: tera::Error) -> Self {
        match e.kind {
            tera::ErrorKind::TemplateNotFound(name) => Self::NotFound(name),
            _ => Self::Render(e.to_string()),
        }
    }
}

/// Embedded templates - compiled into the binary
mod embedded {
    pub const WEATHER_INDEX: &str = include_str!("weather/index.html");
}

/// Data behind the weather page
///
/// `default_units` and `default_lang` pre-fill the form; after a lookup
/// they hold the values the user submitted.
#[derive(Debug, Clone, Serialize)]
pub struct WeatherPage {
    /// Current conditions, when a lookup succeeded
    pub result: Option<CurrentConditions>,
    /// Daily summaries, when a lookup succeeded
    pub forecast5: Option<Vec<DailySummary>>,
    /// User-visible error message
    pub error: Option<String>,
    /// Whether either lookup was served from cache
    pub from_cache: bool,
    /// City typed into the form
    pub city: String,
    /// Units selected in the form
    pub default_units: String,
    /// Language typed into the form
    pub default_lang: String,
}

impl WeatherPage {
    /// Empty page showing the form with the given defaults
    #[must_use]
    pub fn new(units: Units, lang: &LanguageCode) -> Self {
        Self {
            result: None,
            forecast5: None,
            error: None,
            from_cache: false,
            city: String::new(),
            default_units: units.as_str().to_string(),
            default_lang: lang.as_str().to_string(),
        }
    }

    /// Keep the submitted city in the form
    #[must_use]
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    /// Show an error instead of results
    #[must_use]
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }

    /// Show a successful lookup
    #[must_use]
    pub fn with_weather(
        mut self,
        current: CurrentConditions,
        forecast: Vec<DailySummary>,
        from_cache: bool,
    ) -> Self {
        self.result = Some(current);
        self.forecast5 = Some(forecast);
        self.from_cache = from_cache;
        self
    }
}

/// Template engine using Tera
#[derive(Clone)]
pub struct TemplateEngine {
    tera: Arc<Tera>,
}

impl std::fmt::Debug for TemplateEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateEngine")
            .field("templates", &self.tera.get_template_names().count())
            .finish_non_exhaustive()
    }
}

impl TemplateEngine {
    /// Create a template engine with the embedded templates loaded
    ///
    /// # Errors
    ///
    /// Returns an error if an embedded template fails to compile.
    pub fn new() -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![".html", ".htm", ".xml"]);

        tera.add_raw_template(WEATHER_PAGE, embedded::WEATHER_INDEX)
            .map_err(|e| TemplateError::Compile(e.to_string()))?;

        tera.register_filter("temp_unit", temp_unit_filter);
        tera.register_filter("wind_unit", wind_unit_filter);
        tera.register_filter("percent", percent_filter);

        debug!(templates = tera.get_template_names().count(), "Templates loaded");

        Ok(Self {
            tera: Arc::new(tera),
        })
    }

    /// Render a template from any serializable data
    ///
    /// # Errors
    ///
    /// Returns an error if the data is not an object or rendering fails.
    pub fn render<T: Serialize>(&self, template_name: &str, data: &T) -> Result<String, TemplateError> {
        let context =
            Context::from_serialize(data).map_err(|e| TemplateError::Context(e.to_string()))?;
        self.tera
            .render(template_name, &context)
            .map_err(TemplateError::from)
    }

    /// Render the weather page
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn render_weather_page(&self, page: &WeatherPage) -> Result<String, TemplateError> {
        self.render(WEATHER_PAGE, page)
    }

    /// Check if a template exists
    #[must_use]
    pub fn template_exists(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|n| n == name)
    }
}

fn units_arg(value: &Value, filter: &str) -> tera::Result<Units> {
    let tag = value
        .as_str()
        .ok_or_else(|| tera::Error::msg(format!("{filter} requires a string")))?;
    Ok(Units::parse_or(Some(tag), Units::Metric))
}

/// Custom filter: units tag to temperature symbol
fn temp_unit_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let units = units_arg(value, "temp_unit")?;
    Ok(Value::String(units.temperature_symbol().to_string()))
}

/// Custom filter: units tag to wind speed unit
fn wind_unit_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let units = units_arg(value, "wind_unit")?;
    Ok(Value::String(units.wind_speed_unit().to_string()))
}

/// Custom filter: probability to whole percentage
#[allow(clippy::cast_possible_truncation)]
fn percent_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let probability = value
        .as_f64()
        .ok_or_else(|| tera::Error::msg("percent requires a number"))?;
    Ok(Value::from((probability * 100.0).round() as i64))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> TemplateEngine {
        TemplateEngine::new().unwrap()
    }

    fn conditions() -> CurrentConditions {
        CurrentConditions {
            city: "Buenos Aires, AR".to_string(),
            temp: Some(22.5),
            feels_like: Some(21.0),
            humidity: Some(60.0),
            pressure: Some(1013.0),
            desc: "cielo claro".to_string(),
            icon: Some("01d".to_string()),
            wind_speed: Some(3.6),
            units: Units::Metric,
            tz_offset: Some(-10800),
            dt: Some(1_700_000_000),
        }
    }

    fn summary() -> DailySummary {
        DailySummary {
            date: "2024-01-01".to_string(),
            day: "Lun 01".to_string(),
            temp_min: 10.0,
            temp_max: 22.0,
            desc: "lluvia ligera".to_string(),
            icon: Some("10d".to_string()),
            pop: 0.15,
        }
    }

    #[test]
    fn engine_loads_weather_page() {
        let engine = engine();
        assert!(engine.template_exists(WEATHER_PAGE));
        assert!(!engine.template_exists("missing.html"));
    }

    #[test]
    fn empty_page_shows_form_with_defaults() {
        let page = WeatherPage::new(Units::Imperial, &LanguageCode::new("en").unwrap());
        let html = engine().render_weather_page(&page).unwrap();
        assert!(html.contains(r#"<form method="post" action="/weather">"#));
        assert!(html.contains(r#"<option value="imperial" selected>"#));
        assert!(html.contains(r#"name="lang" value="en""#));
        assert!(!html.contains("class=\"error\""));
        assert!(!html.contains("class=\"forecast\""));
    }

    #[test]
    fn page_renders_results() {
        let page = WeatherPage::new(Units::Metric, &LanguageCode::spanish())
            .with_city("Buenos Aires")
            .with_weather(conditions(), vec![summary()], false);
        let html = engine().render_weather_page(&page).unwrap();

        assert!(html.contains("Buenos Aires, AR"));
        assert!(html.contains("22.5°C"));
        assert!(html.contains("cielo claro"));
        assert!(html.contains("01d@2x.png"));
        assert!(html.contains("Lun 01"));
        assert!(html.contains("15% rain"));
        assert!(html.contains("Wind 3.6"));
        assert!(!html.contains("badge\">cached"));
    }

    #[test]
    fn page_shows_cache_badge() {
        let page = WeatherPage::new(Units::Metric, &LanguageCode::spanish()).with_weather(
            conditions(),
            vec![],
            true,
        );
        let html = engine().render_weather_page(&page).unwrap();
        assert!(html.contains(r#"<span class="badge">cached</span>"#));
    }

    #[test]
    fn page_tolerates_missing_readings() {
        let current = CurrentConditions {
            temp: None,
            feels_like: None,
            humidity: None,
            pressure: None,
            icon: None,
            wind_speed: None,
            ..conditions()
        };
        let page = WeatherPage::new(Units::Metric, &LanguageCode::spanish()).with_weather(
            current,
            vec![],
            false,
        );
        let html = engine().render_weather_page(&page).unwrap();
        assert!(html.contains("Buenos Aires, AR"));
        assert!(!html.contains("Humidity"));
        assert!(!html.contains("@2x.png"));
    }

    #[test]
    fn error_is_escaped() {
        let page = WeatherPage::new(Units::Metric, &LanguageCode::spanish())
            .with_error("<script>alert(1)</script>");
        let html = engine().render_weather_page(&page).unwrap();
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>alert(1)</script>"));
    }

    #[test]
    fn submitted_city_is_escaped() {
        let page =
            WeatherPage::new(Units::Metric, &LanguageCode::spanish()).with_city("\"><b>x</b>");
        let html = engine().render_weather_page(&page).unwrap();
        assert!(!html.contains("<b>x</b>"));
    }

    #[test]
    fn render_unknown_template_fails() {
        let page = WeatherPage::new(Units::Metric, &LanguageCode::spanish());
        let err = engine().render("nope.html", &page).unwrap_err();
        assert!(matches!(err, TemplateError::NotFound(name) if name == "nope.html"));
    }

    #[test]
    fn temp_unit_filter_maps_units() {
        let args = HashMap::new();
        let metric = temp_unit_filter(&Value::from("metric"), &args).unwrap();
        let imperial = temp_unit_filter(&Value::from("imperial"), &args).unwrap();
        assert_eq!(metric, Value::from("°C"));
        assert_eq!(imperial, Value::from("°F"));
    }

    #[test]
    fn temp_unit_filter_rejects_non_string() {
        let args = HashMap::new();
        assert!(temp_unit_filter(&Value::from(1), &args).is_err());
    }

    #[test]
    fn percent_filter_rounds() {
        let args = HashMap::new();
        assert_eq!(percent_filter(&Value::from(0.15), &args).unwrap(), Value::from(15));
        assert_eq!(percent_filter(&Value::from(1.0), &args).unwrap(), Value::from(100));
        assert!(percent_filter(&Value::from("x"), &args).is_err());
    }
}
