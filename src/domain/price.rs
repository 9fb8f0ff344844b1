//! Fixed-point exchange rate between two assets.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, Decimals};

/// Exchange rate expressed as a scaled integer: `quote per base × 10^decimals`.
///
/// A price of `2.0` at 18 decimals is stored as `2 * 10^18`. No floating
/// point is involved; the raw value is whatever the engine's floor division
/// produced.
///
/// # Examples
///
/// ```
/// use pairswap::domain::{Amount, Decimals, Price};
///
/// let p = Price::new(Amount::new(500_000_000_000_000_000), Decimals::MAX);
/// assert_eq!(p.to_string(), "0.5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Price {
    scaled: Amount,
    decimals: Decimals,
}

impl Price {
    /// Creates a price from its scaled raw value and precision.
    pub const fn new(scaled: Amount, decimals: Decimals) -> Self {
        Self { scaled, decimals }
    }

    /// Returns the scaled raw value (`price × 10^decimals`).
    pub const fn scaled(&self) -> Amount {
        self.scaled
    }

    /// Returns the fixed-point precision.
    #[must_use]
    pub const fn decimals(&self) -> Decimals {
        self.decimals
    }
}

impl fmt::Display for Price {
    /// Formats as a decimal number with trailing fractional zeros removed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let factor = self.decimals.factor();
        let (Some(whole), Some(frac)) = (
            self.scaled.checked_div(&factor),
            self.scaled.checked_rem(&factor),
        ) else {
            return write!(f, "{}", self.scaled);
        };
        if frac.is_zero() {
            return write!(f, "{whole}");
        }
        let width = usize::from(self.decimals.get());
        let digits = format!("{:0>width$}", frac.to_string());
        write!(f, "{whole}.{}", digits.trim_end_matches('0'))
    }
}
