//! Error types for the cache
//!
//! Provides unified error handling using thiserror. Misses and no-op
//! clears are ordinary absent results, never errors.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for cache operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// The cache cannot admit a new entry and eviction cannot make room.
    ///
    /// Only reachable with a capacity of zero: with any positive capacity
    /// there is always an eviction victim other than the entry being
    /// inserted.
    #[error("cache full: {0}")]
    CacheFull(String),
}

// == Result Type Alias ==
/// Convenience Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
