//! Decimal places of an asset or fixed-point value.

use serde::{Deserialize, Serialize};

use super::Amount;
use crate::error::AmmError;

/// Maximum allowed decimal places (EVM standard).
const MAX_DECIMALS: u8 = 18;

/// Number of decimal places used to express whole units.
///
/// Valid range is `0..=18`. It describes both asset denominations (the
/// share token has 18) and the precision of fixed-point prices, where
/// `10^decimals` is the price scale.
///
/// # Examples
///
/// ```
/// use pairswap::domain::{Amount, Decimals};
///
/// let d = Decimals::new(18).expect("18 is valid");
/// assert_eq!(d.scale_up(2), Amount::new(2_000_000_000_000_000_000));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Decimals(u8);

impl Decimals {
    /// Zero decimal places.
    pub const ZERO: Self = Self(0);

    /// Eighteen decimal places, the default for assets, shares and prices.
    pub const MAX: Self = Self(MAX_DECIMALS);

    /// Creates a new `Decimals` value after validating the range.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `value` exceeds 18.
    pub const fn new(value: u8) -> Result<Self, AmmError> {
        if value > MAX_DECIMALS {
            return Err(AmmError::InvalidConfiguration("decimals must be 0..=18"));
        }
        Ok(Self(value))
    }

    /// Returns the raw decimal count.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Returns `10^decimals`, the raw value of one whole unit.
    pub const fn factor(&self) -> Amount {
        Amount::new(10u128.pow(self.0 as u32))
    }

    /// Converts whole units to raw units.
    ///
    /// Cannot overflow: `u64::MAX * 10^18` fits comfortably in 256 bits.
    pub const fn scale_up(&self, whole: u64) -> Amount {
        Amount::new((whole as u128) * 10u128.pow(self.0 as u32))
    }
}

impl TryFrom<u8> for Decimals {
    type Error = AmmError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Decimals> for u8 {
    fn from(value: Decimals) -> Self {
        value.0
    }
}
