//! Configuration Module
//!
//! Cache construction parameters, loadable from environment variables.

use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

// == Defaults ==
/// Default entry expiration in seconds.
pub const DEFAULT_EXPIRE_SECS: u64 = 300;

/// Default maximum number of entries across all groups.
pub const DEFAULT_MAX_ENTRIES: usize = 1000;

/// Cache configuration parameters.
///
/// Set once at construction and immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// How long an entry remains valid after being written
    #[serde(default = "default_expire_after")]
    pub expire_after: Duration,
    /// Maximum number of entries across all groups; `None` disables
    /// capacity eviction entirely
    #[serde(default = "default_max_entries")]
    pub max_entries: Option<usize>,
}

fn default_expire_after() -> Duration {
    Duration::from_secs(DEFAULT_EXPIRE_SECS)
}

fn default_max_entries() -> Option<usize> {
    Some(DEFAULT_MAX_ENTRIES)
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            expire_after: default_expire_after(),
            max_entries: default_max_entries(),
        }
    }
}

impl CacheConfig {
    /// Creates a config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_EXPIRE_SECS` - Entry expiration in seconds (default: 300)
    /// - `CACHE_MAX_ENTRIES` - Maximum cache entries (default: 1000)
    pub fn from_env() -> Self {
        Self {
            expire_after: env::var("CACHE_EXPIRE_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or_else(default_expire_after),
            max_entries: env::var("CACHE_MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Some)
                .unwrap_or_else(default_max_entries),
        }
    }

    /// Builder method to set the expiration duration.
    pub fn expire_after(mut self, expire_after: Duration) -> Self {
        self.expire_after = expire_after;
        self
    }

    /// Builder method to set the capacity limit.
    pub fn with_capacity(mut self, max_entries: usize) -> Self {
        self.max_entries = Some(max_entries);
        self
    }

    /// Builder method to disable capacity eviction.
    pub fn unbounded(mut self) -> Self {
        self.max_entries = None;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = CacheConfig::default();
        assert_eq!(config.expire_after, Duration::from_secs(300));
        assert_eq!(config.max_entries, Some(1000));
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("CACHE_EXPIRE_SECS");
        env::remove_var("CACHE_MAX_ENTRIES");

        let config = CacheConfig::from_env();
        assert_eq!(config.expire_after, Duration::from_secs(300));
        assert_eq!(config.max_entries, Some(1000));
    }

    #[test]
    fn test_config_builders() {
        let config = CacheConfig::default()
            .expire_after(Duration::from_secs(60))
            .with_capacity(16);
        assert_eq!(config.expire_after, Duration::from_secs(60));
        assert_eq!(config.max_entries, Some(16));

        let config = config.unbounded();
        assert_eq!(config.max_entries, None);
    }

    #[test]
    fn test_config_deserialize_with_defaults() {
        let config: CacheConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.expire_after, Duration::from_secs(300));
        assert_eq!(config.max_entries, Some(1000));
    }
}
