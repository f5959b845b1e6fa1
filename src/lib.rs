//! Group Cache - A concurrent group-scoped in-memory cache
//!
//! Caches immutable metadata blobs addressed by `(group, key)` so that one
//! worker's fetch can be reused by every later requester in the same group.
//! Entries age out lazily after a configurable expiration, a global capacity
//! bound evicts the oldest-written entry when the cache is full, and a whole
//! group can be invalidated in one call when it terminates.
//!
//! # Example
//! ```
//! use group_cache::{CacheConfig, GroupCache};
//!
//! let cache: GroupCache<&str, &str, String> =
//!     GroupCache::new(CacheConfig::default().with_capacity(1024));
//!
//! cache.put("job-7", "blob-a", "descriptor".to_string()).unwrap();
//! assert_eq!(cache.get(&"job-7", &"blob-a"), Some("descriptor".to_string()));
//!
//! cache.clear_group(&"job-7");
//! assert!(cache.is_empty());
//! ```

pub mod cache;
pub mod clock;
pub mod config;
pub mod error;

// Re-export public types
pub use cache::{CacheStats, GroupCache, GroupCacheStore};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
