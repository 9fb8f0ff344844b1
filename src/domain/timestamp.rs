//! Unix timestamps used for deadlines.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Seconds since the Unix epoch.
///
/// Deadlines are plain timestamps: an operation carrying `deadline` is valid
/// while `now <= deadline` and expired once `now > deadline`.
///
/// # Examples
///
/// ```
/// use pairswap::domain::Timestamp;
///
/// let deadline = Timestamp::new(1_000);
/// assert!(!deadline.has_passed(Timestamp::new(1_000)));
/// assert!(deadline.has_passed(Timestamp::new(1_001)));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    /// Creates a timestamp from seconds since the epoch.
    #[must_use]
    pub const fn new(secs: u64) -> Self {
        Self(secs)
    }

    /// Returns seconds since the epoch.
    #[must_use]
    pub const fn secs(&self) -> u64 {
        self.0
    }

    /// Returns this timestamp shifted forward, saturating at `u64::MAX`.
    #[must_use]
    pub const fn plus_secs(&self, secs: u64) -> Self {
        Self(self.0.saturating_add(secs))
    }

    /// Returns this timestamp shifted backward, saturating at zero.
    #[must_use]
    pub const fn minus_secs(&self, secs: u64) -> Self {
        Self(self.0.saturating_sub(secs))
    }

    /// Returns `true` if `now` is strictly later than this deadline.
    #[must_use]
    pub const fn has_passed(&self, now: Self) -> bool {
        now.0 > self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}
