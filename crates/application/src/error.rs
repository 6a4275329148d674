//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error (validation of user input)
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Configuration error, e.g. a missing API key
    #[error("{0}")]
    Configuration(String),

    /// The weather provider answered with a non-success status
    #[error("Upstream API error ({status}): {message}")]
    Upstream {
        /// HTTP status code returned by the provider
        status: u16,
        /// Provider message, raw body, or `no details`
        message: String,
    },

    /// Network or timeout failure talking to the provider
    #[error("Weather service unavailable: {0}")]
    ExternalService(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Whether the error was caused by the request rather than the provider
    ///
    /// Client errors map to HTTP 400 at the boundary, everything else to 502.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::Domain(_) | Self::Configuration(_))
    }

    /// Stable machine-readable code for this error
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Domain(_) => "validation_error",
            Self::Configuration(_) => "configuration_error",
            Self::Upstream { .. } => "upstream_error",
            Self::ExternalService(_) => "service_unavailable",
            Self::Internal(_) => "internal_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_is_transparent() {
        let err = ApplicationError::from(DomainError::CityRequired);
        assert_eq!(err.to_string(), "City is required");
        assert!(err.is_client_error());
    }

    #[test]
    fn upstream_error_message() {
        let err = ApplicationError::Upstream {
            status: 404,
            message: "city not found".to_string(),
        };
        assert_eq!(err.to_string(), "Upstream API error (404): city not found");
        assert!(!err.is_client_error());
        assert_eq!(err.code(), "upstream_error");
    }

    #[test]
    fn external_service_message() {
        let err = ApplicationError::ExternalService("timed out".to_string());
        assert_eq!(err.to_string(), "Weather service unavailable: timed out");
        assert_eq!(err.code(), "service_unavailable");
    }

    #[test]
    fn configuration_is_client_error() {
        let err = ApplicationError::Configuration("Missing OpenWeather API key".to_string());
        assert!(err.is_client_error());
        assert_eq!(err.to_string(), "Missing OpenWeather API key");
    }
}
