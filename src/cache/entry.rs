//! Cache Entry Module
//!
//! Composite identity and stored entry for one cached value.

use std::time::Duration;

// == Cache Key ==
/// Composite identity addressing one cached value.
///
/// Keys are unique only within a group; the same key under two different
/// groups addresses two independent entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey<G, K> {
    /// Group the entry belongs to
    pub group: G,
    /// Key within the group
    pub key: K,
}

impl<G, K> CacheKey<G, K> {
    /// Creates a composite identity from a group and a key.
    pub fn new(group: G, key: K) -> Self {
        Self { group, key }
    }
}

// == Cache Entry ==
/// One cached value plus its bookkeeping.
///
/// The value is treated as an opaque immutable blob; the cache never
/// inspects or mutates it.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Clock reading at which the entry stops being valid
    pub expires_at: Duration,
    /// Write-order marker used to pick eviction victims
    pub recency: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates an entry expiring `expire_after` past the `written_at`
    /// clock reading.
    pub fn new(value: V, written_at: Duration, expire_after: Duration, recency: u64) -> Self {
        Self {
            value,
            expires_at: written_at
                .checked_add(expire_after)
                .unwrap_or(Duration::MAX),
            recency,
        }
    }

    // == Is Expired ==
    /// Checks whether the entry has expired at the given clock reading.
    ///
    /// The boundary is inclusive: the entry is expired once the reading
    /// reaches `expires_at` exactly.
    pub fn is_expired(&self, now: Duration) -> bool {
        now >= self.expires_at
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_not_expired_before_deadline() {
        let entry = CacheEntry::new("value", Duration::ZERO, Duration::from_secs(10), 0);

        assert!(!entry.is_expired(Duration::ZERO));
        assert!(!entry.is_expired(Duration::from_secs(9)));
    }

    #[test]
    fn test_entry_expired_past_deadline() {
        let entry = CacheEntry::new("value", Duration::ZERO, Duration::from_secs(10), 0);

        assert!(entry.is_expired(Duration::from_secs(11)));
    }

    #[test]
    fn test_expiration_boundary_is_inclusive() {
        let entry = CacheEntry::new("value", Duration::from_secs(5), Duration::from_secs(10), 0);

        assert!(!entry.is_expired(Duration::from_millis(14_999)));
        assert!(entry.is_expired(Duration::from_secs(15)));
    }

    #[test]
    fn test_deadline_saturates_instead_of_overflowing() {
        let entry = CacheEntry::new("value", Duration::from_secs(1), Duration::MAX, 0);

        assert_eq!(entry.expires_at, Duration::MAX);
        assert!(!entry.is_expired(Duration::from_secs(u64::MAX)));
    }

    #[test]
    fn test_cache_key_equality_is_per_group() {
        let a = CacheKey::new("g1", "k");
        let b = CacheKey::new("g2", "k");
        let c = CacheKey::new("g1", "k");

        assert_ne!(a, b);
        assert_eq!(a, c);
    }
}
