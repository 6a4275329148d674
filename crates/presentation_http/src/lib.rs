//! Weatherdesk HTTP presentation layer
//!
//! This crate provides the weather page and JSON API for Weatherdesk.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod shutdown;
pub mod state;
pub mod tasks;

pub use error::ApiError;
pub use middleware::SecurityHeadersLayer;
pub use routes::create_router;
pub use state::AppState;
