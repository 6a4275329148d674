//! Domain layer for Weatherdesk
//!
//! Contains the weather vocabulary (queries, samples, daily summaries,
//! current conditions) and the forecast summarization rules.
//! This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod forecast;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use forecast::{MAX_FORECAST_DAYS, WeekdayLabels, summarize_forecast};
pub use value_objects::*;
