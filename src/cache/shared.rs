//! Shared Cache Module
//!
//! Thread-safe handle over the cache store for concurrent callers.

use std::hash::Hash;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::cache::{CacheStats, GroupCacheStore};
use crate::clock::{Clock, SystemClock};
use crate::config::CacheConfig;
use crate::error::Result;

// == Group Cache ==
/// Concurrent group-scoped cache.
///
/// Wraps a [`GroupCacheStore`] in a single mutex so the entry store,
/// group index, and recency tracking are always mutated as a unit: no
/// caller can observe a key present in one structure and absent from
/// another. Every operation holds the lock for bounded time (O(1) for
/// `get`/`put`, O(group size) for `clear_group`) and never suspends or
/// performs I/O, so callers on independent threads need no external
/// coordination.
///
/// Values are immutable once inserted; `get` hands out clones, so callers
/// that want shared ownership should store `Arc<V>`.
#[derive(Debug)]
pub struct GroupCache<G, K, V> {
    store: Mutex<GroupCacheStore<G, K, V>>,
}

impl<G, K, V> GroupCache<G, K, V>
where
    G: Clone + Eq + Hash,
    K: Clone + Eq + Hash,
    V: Clone,
{
    // == Constructors ==
    /// Creates a cache driven by real elapsed time.
    pub fn new(config: CacheConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock::new()))
    }

    /// Creates a cache with an injected time source.
    pub fn with_clock(config: CacheConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            store: Mutex::new(GroupCacheStore::new(config, clock)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, GroupCacheStore<G, K, V>> {
        // The store never panics mid-mutation, so a poisoned guard still
        // protects a consistent store.
        self.store
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    // == Get ==
    /// Retrieves the value cached under `(group, key)`, dropping the
    /// entry first if its deadline has passed.
    pub fn get(&self, group: &G, key: &K) -> Option<V> {
        self.lock().get(group, key)
    }

    // == Put ==
    /// Stores `value` under `(group, key)`, evicting the oldest-written
    /// entry first when the cache is at capacity.
    ///
    /// Returns the value previously stored under the same identity, if
    /// any.
    pub fn put(&self, group: G, key: K, value: V) -> Result<Option<V>> {
        self.lock().put(group, key, value)
    }

    // == Clear Group ==
    /// Removes every entry cached under `group`.
    ///
    /// A no-op for unknown or already-cleared groups. An insert completed
    /// before this call on another thread is always covered by it.
    pub fn clear_group(&self, group: &G) {
        self.lock().clear_group(group)
    }

    // == Stats ==
    /// Returns a snapshot of the cache counters.
    pub fn stats(&self) -> CacheStats {
        self.lock().stats()
    }

    // == Length ==
    /// Current number of live entries across all groups.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Number of groups with at least one cached entry.
    pub fn group_count(&self) -> usize {
        self.lock().group_count()
    }
}
