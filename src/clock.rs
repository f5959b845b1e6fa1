//! Clock Module
//!
//! Abstracts time as an injectable capability so expiration can be tested
//! deterministically without real delays.

use std::fmt::Debug;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

// == Clock Trait ==
/// A monotonically non-decreasing time source.
///
/// Readings are opaque durations since an arbitrary origin; only the
/// difference between two readings is meaningful. Implementations must
/// never report a reading earlier than a previous one; expiration
/// correctness is undefined under a non-monotonic clock.
pub trait Clock: Send + Sync + Debug {
    /// Returns the elapsed time since the clock's origin.
    fn now(&self) -> Duration;
}

// == System Clock ==
/// Production clock reading real elapsed time.
///
/// The origin is the moment of construction, measured with
/// [`Instant`], which is monotonic by contract.
#[derive(Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Creates a clock whose origin is now.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

// == Manual Clock ==
/// Controllable clock for deterministic tests.
///
/// Starts at zero and only moves when [`advance`](ManualClock::advance)
/// is called, so expiration scenarios can fast-forward without sleeping.
#[derive(Debug, Default)]
pub struct ManualClock {
    nanos: AtomicU64,
}

impl ManualClock {
    /// Creates a clock reading zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the clock forward by `duration`.
    pub fn advance(&self, duration: Duration) {
        self.nanos
            .fetch_add(duration.as_nanos() as u64, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        Duration::from_nanos(self.nanos.load(Ordering::SeqCst))
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_starts_at_zero() {
        let clock = ManualClock::new();
        assert_eq!(clock.now(), Duration::ZERO);
    }

    #[test]
    fn test_manual_clock_advance_accumulates() {
        let clock = ManualClock::new();

        clock.advance(Duration::from_secs(1));
        assert_eq!(clock.now(), Duration::from_secs(1));

        clock.advance(Duration::from_millis(500));
        assert_eq!(clock.now(), Duration::from_millis(1500));
    }

    #[test]
    fn test_manual_clock_does_not_move_on_its_own() {
        let clock = ManualClock::new();
        let first = clock.now();
        let second = clock.now();
        assert_eq!(first, second);
    }

    #[test]
    fn test_system_clock_is_non_decreasing() {
        let clock = SystemClock::new();
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }
}
