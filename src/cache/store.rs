//! Cache Store Module
//!
//! Core cache engine combining the entry store, group index, recency
//! tracking, and lazy expiration.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::cache::{CacheEntry, CacheKey, CacheStats, GroupIndex, RecencyTracker};
use crate::clock::Clock;
use crate::config::CacheConfig;
use crate::error::{CacheError, Result};

// == Group Cache Store ==
/// Single-threaded cache engine addressed by `(group, key)`.
///
/// The store owns every cached value; the group index holds key
/// identifiers and the recency tracker holds identities only. A key
/// appears in the group index exactly when its entry is in the store, and
/// every mutating operation updates all three structures together.
/// [`GroupCache`](crate::cache::GroupCache) puts one lock around the whole
/// store to make that atomic for concurrent callers.
///
/// Entries are destroyed by exactly three paths, all funneled through the
/// same removal step: lazy expiration discovered by `get`, capacity
/// eviction triggered by `put`, and bulk removal via `clear_group`.
#[derive(Debug)]
pub struct GroupCacheStore<G, K, V> {
    /// Authoritative (group, key) -> entry storage
    entries: HashMap<CacheKey<G, K>, CacheEntry<V>>,
    /// Keys currently cached per group, for O(group) bulk clears
    groups: GroupIndex<G, K>,
    /// Write-order queue for eviction victim selection
    recency: RecencyTracker<CacheKey<G, K>>,
    /// Performance counters
    stats: CacheStats,
    /// How long an entry remains valid after a write
    expire_after: Duration,
    /// Capacity across all groups; `None` disables eviction
    max_entries: Option<usize>,
    /// Injected time source for expiration
    clock: Arc<dyn Clock>,
}

impl<G, K, V> GroupCacheStore<G, K, V>
where
    G: Clone + Eq + Hash,
    K: Clone + Eq + Hash,
    V: Clone,
{
    // == Constructor ==
    /// Creates a new store from a configuration and a time source.
    pub fn new(config: CacheConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            groups: GroupIndex::new(),
            recency: RecencyTracker::new(),
            stats: CacheStats::new(),
            expire_after: config.expire_after,
            max_entries: config.max_entries,
            clock,
        }
    }

    // == Get ==
    /// Retrieves the value cached under `(group, key)`.
    ///
    /// An entry whose deadline has passed is removed before the miss is
    /// reported: expiration is discovered by reads, never by a timer.
    /// Reads do not refresh recency; eviction order is tied to writes
    /// only.
    pub fn get(&mut self, group: &G, key: &K) -> Option<V> {
        let id = CacheKey::new(group.clone(), key.clone());

        if let Some(entry) = self.entries.get(&id) {
            if !entry.is_expired(self.clock.now()) {
                self.stats.record_hit();
                return Some(entry.value.clone());
            }
        } else {
            self.stats.record_miss();
            return None;
        }

        // Deadline reached: drop through the shared removal path.
        self.remove_entry(&id);
        self.stats.record_expiration();
        self.stats.record_miss();
        debug!("dropped expired entry on read");
        None
    }

    // == Put ==
    /// Stores `value` under `(group, key)`.
    ///
    /// An existing entry is replaced in place: its deadline and recency
    /// are refreshed, the total count is unchanged, and the previous
    /// value is returned as-is. Deadlines are only checked by `get`, so
    /// the previous value may already have been past its own deadline.
    ///
    /// A new entry first makes room when the store is at capacity by
    /// evicting the entry that has gone longest without a write. The
    /// victim is never the entry being inserted; with a capacity of zero
    /// no victim exists and the insert is rejected with
    /// [`CacheError::CacheFull`].
    pub fn put(&mut self, group: G, key: K, value: V) -> Result<Option<V>> {
        let now = self.clock.now();
        let id = CacheKey::new(group.clone(), key.clone());

        // Replace in place without changing the total count.
        if let Some(entry) = self.entries.get_mut(&id) {
            let marker = self.recency.touch(id, Some(entry.recency));
            let previous = std::mem::replace(
                entry,
                CacheEntry::new(value, now, self.expire_after, marker),
            );
            return Ok(Some(previous.value));
        }

        // At capacity: make room before admitting the new entry.
        if let Some(limit) = self.max_entries {
            if self.entries.len() >= limit {
                self.evict_oldest(limit)?;
            }
        }

        let marker = self.recency.touch(id.clone(), None);
        self.entries
            .insert(id, CacheEntry::new(value, now, self.expire_after, marker));
        self.groups.register(group, key);
        self.refresh_totals();
        Ok(None)
    }

    // == Clear Group ==
    /// Removes every entry cached under `group` and drops the group's
    /// index record.
    ///
    /// Cost is proportional to the group's size, not to the total cache
    /// size. Clearing an unknown or already-cleared group is a no-op.
    pub fn clear_group(&mut self, group: &G) {
        let Some(keys) = self.groups.keys_of(group) else {
            return;
        };
        let keys: Vec<K> = keys.iter().cloned().collect();

        for key in &keys {
            self.remove_entry(&CacheKey::new(group.clone(), key.clone()));
        }
        debug!("cleared {} entries for terminated group", keys.len());
    }

    // == Evict Oldest ==
    /// Evicts the entry that has gone longest without a write.
    fn evict_oldest(&mut self, limit: usize) -> Result<()> {
        let victim = match self.recency.peek_oldest() {
            Some(id) => id.clone(),
            // Only reachable with a capacity of zero: every stored entry
            // is tracked, so a non-empty store always yields a victim.
            None => {
                return Err(CacheError::CacheFull(format!(
                    "capacity limit of {limit} cannot admit any entry"
                )))
            }
        };

        self.remove_entry(&victim);
        self.stats.record_eviction();
        debug!("evicted oldest entry to stay within capacity limit of {limit}");
        Ok(())
    }

    // == Remove Entry ==
    /// Shared removal path for all destruction paths (lazy expiration,
    /// capacity eviction, group clear).
    ///
    /// Removes the entry, releases its recency slot, and deregisters the
    /// key from the group index as one logical step.
    fn remove_entry(&mut self, id: &CacheKey<G, K>) -> Option<CacheEntry<V>> {
        let entry = self.entries.remove(id)?;
        self.recency.remove(entry.recency);
        self.groups.deregister(&id.group, &id.key);
        self.refresh_totals();
        Some(entry)
    }

    fn refresh_totals(&mut self) {
        self.stats.set_total_entries(self.entries.len());
        self.stats.set_total_groups(self.groups.group_count());
    }

    // == Stats ==
    /// Returns a snapshot of the cache counters.
    pub fn stats(&self) -> CacheStats {
        self.stats.clone()
    }

    // == Length ==
    /// Current number of live entries across all groups.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of groups with at least one cached entry.
    pub fn group_count(&self) -> usize {
        self.groups.group_count()
    }
}
