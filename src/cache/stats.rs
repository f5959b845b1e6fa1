//! Cache Statistics Module
//!
//! Tracks cache performance metrics including hits, misses, evictions,
//! and lazy expirations.

use serde::Serialize;

// == Cache Stats ==
/// Tracks cache performance metrics.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Number of successful cache retrievals
    pub hits: u64,
    /// Number of failed cache retrievals (key not found or expired)
    pub misses: u64,
    /// Number of entries evicted by the capacity policy
    pub evictions: u64,
    /// Number of entries dropped after their deadline passed
    pub expirations: u64,
    /// Current number of entries across all groups
    pub total_entries: usize,
    /// Current number of groups with at least one entry
    pub total_groups: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been
    /// made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Eviction ==
    /// Increments the eviction counter.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    // == Record Expiration ==
    /// Increments the lazy expiration counter.
    pub fn record_expiration(&mut self) {
        self.expirations += 1;
    }

    // == Update Totals ==
    /// Updates the total entry count.
    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }

    /// Updates the group count.
    pub fn set_total_groups(&mut self, count: usize) {
        self.total_groups = count;
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = CacheStats::new();
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 0);
        assert_eq!(stats.evictions, 0);
        assert_eq!(stats.expirations, 0);
        assert_eq!(stats.total_entries, 0);
        assert_eq!(stats.total_groups, 0);
    }

    #[test]
    fn test_hit_rate_no_lookups() {
        let stats = CacheStats::new();
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate_mixed() {
        let mut stats = CacheStats::new();
        stats.record_hit();
        stats.record_miss();
        assert_eq!(stats.hit_rate(), 0.5);
    }

    #[test]
    fn test_record_counters() {
        let mut stats = CacheStats::new();
        stats.record_eviction();
        stats.record_expiration();
        stats.record_expiration();
        assert_eq!(stats.evictions, 1);
        assert_eq!(stats.expirations, 2);
    }

    #[test]
    fn test_set_totals() {
        let mut stats = CacheStats::new();
        stats.set_total_entries(42);
        stats.set_total_groups(3);
        assert_eq!(stats.total_entries, 42);
        assert_eq!(stats.total_groups, 3);
    }
}
