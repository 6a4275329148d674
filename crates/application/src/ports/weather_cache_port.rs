//! Weather cache port definition
//!
//! Entries are keyed by what was asked for (data kind, city, units, language)
//! and expire after a time-to-live chosen by the implementation.

use std::fmt;

use domain::{CurrentConditions, DailySummary, LanguageCode, Units, WeatherQuery};

/// Which upstream lookup a cache entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheKind {
    Current,
    Forecast,
}

impl CacheKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Forecast => "forecast",
        }
    }
}

/// Composite cache key
///
/// The city is stored trimmed and lower-cased so `" Lima "` and `"lima"`
/// share an entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub kind: CacheKind,
    pub city: String,
    pub units: Units,
    pub lang: LanguageCode,
}

impl CacheKey {
    /// Build the key for a query
    #[must_use]
    pub fn new(kind: CacheKind, query: &WeatherQuery) -> Self {
        Self {
            kind,
            city: query.city.normalized(),
            units: query.units,
            lang: query.lang.clone(),
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.kind.as_str(),
            self.city,
            self.units,
            self.lang.as_str()
        )
    }
}

/// A cached payload
///
/// The forecast is stored already summarized so a hit skips summarization.
#[derive(Debug, Clone, PartialEq)]
pub enum CachedWeather {
    Current(CurrentConditions),
    Forecast(Vec<DailySummary>),
}

/// Cache port for weather lookups
///
/// Implementations must be safe to share between request handlers. Calls are
/// synchronous and must not block for long; they never wait on I/O.
pub trait WeatherCachePort: Send + Sync {
    /// Look up a live entry; expired entries are reported as `None`
    fn get(&self, key: &CacheKey) -> Option<CachedWeather>;

    /// Store or replace an entry, resetting its age
    fn set(&self, key: CacheKey, value: CachedWeather);

    /// Drop every expired entry, returning how many were removed
    fn purge_expired(&self) -> usize;
}
