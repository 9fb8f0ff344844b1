//! Basis-point representation for slippage tolerances.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::Amount;
use crate::error::AmmError;

/// Denominator of every basis-point ratio.
const MAX_BPS: u32 = 10_000;

/// A percentage expressed in basis points (1 bp = 0.01%, 10 000 bp = 100%).
///
/// Used by callers to express how far below a quote they accept a swap
/// output to land, e.g. `BasisPoints::new(100)` for a 1% tolerance.
///
/// # Examples
///
/// ```
/// use pairswap::domain::{Amount, BasisPoints};
///
/// let one_percent = BasisPoints::new(100);
/// assert_eq!(one_percent.apply(Amount::new(1_000)).expect("fits"), Amount::new(10));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BasisPoints(u32);

impl BasisPoints {
    /// No tolerance.
    pub const ZERO: Self = Self(0);

    /// Full tolerance: any output is accepted.
    pub const MAX_PERCENT: Self = Self(MAX_BPS);

    /// Wraps a raw basis-point count. Values above 10 000 are representable
    /// but rejected wherever a percentage is expected.
    pub const fn new(bps: u32) -> Self {
        Self(bps)
    }

    /// Raw basis-point count.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// `true` for `0..=10_000`.
    #[must_use]
    pub const fn is_valid_percent(&self) -> bool {
        self.0 <= MAX_BPS
    }

    /// Computes `floor(amount * self / 10_000)`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the intermediate product overflows.
    pub fn apply(&self, amount: Amount) -> crate::error::Result<Amount> {
        let product = amount
            .checked_mul(&Amount::from(u64::from(self.0)))
            .ok_or(AmmError::Overflow("basis points apply overflow"))?;
        product
            .checked_div(&Amount::from(u64::from(MAX_BPS)))
            .ok_or(AmmError::DivisionByZero)
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}
