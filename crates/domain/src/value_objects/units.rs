//! Unit system value object
//!
//! The upstream provider understands two unit systems: `metric` (°C, m/s)
//! and `imperial` (°F, mph).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// Unit system requested from the weather provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Celsius, meters per second
    #[default]
    Metric,
    /// Fahrenheit, miles per hour
    Imperial,
}

impl Units {
    /// Wire name understood by the provider
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        }
    }

    /// Temperature symbol for display
    #[must_use]
    pub const fn temperature_symbol(&self) -> &'static str {
        match self {
            Self::Metric => "°C",
            Self::Imperial => "°F",
        }
    }

    /// Wind speed unit for display
    #[must_use]
    pub const fn wind_speed_unit(&self) -> &'static str {
        match self {
            Self::Metric => "m/s",
            Self::Imperial => "mph",
        }
    }

    /// Parse a units value, falling back to `default` when it is unknown or blank
    #[must_use]
    pub fn parse_or(value: Option<&str>, default: Self) -> Self {
        value
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Units {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metric" => Ok(Self::Metric),
            "imperial" => Ok(Self::Imperial),
            other => Err(DomainError::InvalidUnits(other.to_string())),
        }
    }
}
