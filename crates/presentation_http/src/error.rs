//! API error handling
//!
//! Maps application errors onto HTTP statuses: problems with the request or
//! the server's own configuration are a 400, provider failures a 502.

use application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use infrastructure::TemplateError;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Weather lookup failed
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Page could not be rendered
    #[error("Failed to render page: {0}")]
    Render(#[from] TemplateError),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
}

impl ApiError {
    /// HTTP status for this error
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Application(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            Self::Application(_) => StatusCode::BAD_GATEWAY,
            Self::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable error code
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Application(e) => e.code(),
            Self::Render(_) => "render_error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            match &self {
                Self::Render(e) => error!(error = %e, "Page rendering failed"),
                Self::Application(e) => warn!(error = %e, "Weather lookup failed"),
            }
        }

        let body = ErrorResponse {
            error: self.to_string(),
            code: self.code().to_string(),
        };

        (status, Json(body)).into_response()
    }
}
