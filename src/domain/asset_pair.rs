//! Ordered pair of distinct assets.

use super::Address;
use crate::error::AmmError;

/// An ordered pair of distinct assets `(first, second)`.
///
/// Unlike a canonical pair, the order is the caller's: reserves are kept per
/// ordered pair, so `(A, B)` addresses the A-side reserve and `(B, A)` the
/// B-side reserve of the same pool. [`AssetPair::reversed`] flips the view.
///
/// # Examples
///
/// ```
/// use pairswap::domain::{Address, AssetPair};
///
/// let eth = Address::repeat_byte(1);
/// let kipu = Address::repeat_byte(2);
/// let pair = AssetPair::new(eth, kipu).expect("distinct assets");
/// assert_eq!(pair.reversed().first(), kipu);
/// assert!(AssetPair::new(eth, eth).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AssetPair {
    first: Address,
    second: Address,
}

impl AssetPair {
    /// Creates an ordered pair.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::IdenticalAssets`] if both addresses are equal.
    pub fn new(first: Address, second: Address) -> Result<Self, AmmError> {
        if first == second {
            return Err(AmmError::IdenticalAssets);
        }
        Ok(Self { first, second })
    }

    /// Returns the first asset.
    #[must_use]
    pub const fn first(&self) -> Address {
        self.first
    }

    /// Returns the second asset.
    #[must_use]
    pub const fn second(&self) -> Address {
        self.second
    }

    /// Returns the same pair viewed from the other side.
    #[must_use]
    pub const fn reversed(&self) -> Self {
        Self {
            first: self.second,
            second: self.first,
        }
    }
}
