//! Concrete [`Clock`] implementations.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;

use crate::domain::Timestamp;
use crate::traits::Clock;

/// Wall-clock time from the host system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        // Pre-epoch system time reads as zero.
        Timestamp::new(u64::try_from(Utc::now().timestamp()).unwrap_or(0))
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same underlying time, so a test can keep one handle and
/// hand another to the engine.
///
/// # Examples
///
/// ```
/// use pairswap::clock::ManualClock;
/// use pairswap::domain::Timestamp;
/// use pairswap::traits::Clock;
///
/// let clock = ManualClock::new(Timestamp::new(1_000));
/// let handle = clock.clone();
/// handle.advance(30);
/// assert_eq!(clock.now(), Timestamp::new(1_030));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    secs: Arc<AtomicU64>,
}

impl ManualClock {
    /// Creates a clock reading `start`.
    #[must_use]
    pub fn new(start: Timestamp) -> Self {
        Self {
            secs: Arc::new(AtomicU64::new(start.secs())),
        }
    }

    /// Sets the current time.
    pub fn set(&self, now: Timestamp) {
        self.secs.store(now.secs(), Ordering::SeqCst);
    }

    /// Moves the clock forward by `secs`, saturating at `u64::MAX`.
    pub fn advance(&self, secs: u64) {
        let _ = self
            .secs
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |t| {
                Some(t.saturating_add(secs))
            });
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        Timestamp::new(self.secs.load(Ordering::SeqCst))
    }
}
