//! Time source used for deadline checks.

use crate::domain::Timestamp;

/// Source of the current time in whole seconds.
///
/// Requests carry an absolute deadline; the engine asks its clock for "now"
/// once per operation and rejects the request if the deadline has passed.
pub trait Clock {
    /// Returns the current time.
    fn now(&self) -> Timestamp;
}
