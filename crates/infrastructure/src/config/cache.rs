//! Cache configuration with TTL settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::default_true;

/// Weather cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Whether caching is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Entry lifetime in seconds (default: 5 minutes)
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,

    /// How often expired entries are purged, in seconds (0 disables purging)
    #[serde(default = "default_purge_interval_secs")]
    pub purge_interval_secs: u64,
}

const fn default_ttl_secs() -> u64 {
    5 * 60 // 5 minutes
}

const fn default_purge_interval_secs() -> u64 {
    10 * 60
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ttl_secs: default_ttl_secs(),
            purge_interval_secs: default_purge_interval_secs(),
        }
    }
}

impl CacheConfig {
    /// Get the configured TTL as a Duration
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }

    /// Purge interval, `None` when caching or purging is disabled
    #[must_use]
    pub const fn purge_interval(&self) -> Option<Duration> {
        if self.enabled && self.purge_interval_secs > 0 {
            Some(Duration::from_secs(self.purge_interval_secs))
        } else {
            None
        }
    }

    /// TTL actually applied; zero when caching is disabled
    #[must_use]
    pub const fn effective_ttl(&self) -> Duration {
        if self.enabled {
            self.ttl()
        } else {
            Duration::ZERO
        }
    }
}
