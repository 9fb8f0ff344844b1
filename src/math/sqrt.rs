//! Integer square root.

use alloy_primitives::U256;

use crate::domain::Amount;

/// Returns `floor(sqrt(n))` using Newton's method on integers.
///
/// Starts from `ceil(n / 2)` and iterates `x = (x + n / x) / 2` until the
/// sequence stops decreasing; the last value is the floored root. Exact and
/// platform independent: no floating point is involved.
///
/// # Examples
///
/// ```
/// use pairswap::domain::Amount;
/// use pairswap::math::isqrt;
///
/// assert_eq!(isqrt(Amount::new(16)), Amount::new(4));
/// assert_eq!(isqrt(Amount::new(17)), Amount::new(4));
/// ```
pub fn isqrt(n: Amount) -> Amount {
    let n = n.get();
    if n.is_zero() {
        return Amount::ZERO;
    }
    let two = U256::from(2u8);
    let mut x = n;
    // ceil(n / 2) without overflowing at U256::MAX.
    let mut y = n / two + n % two;
    while y < x {
        x = y;
        y = (x + n / x) / two;
    }
    Amount::from_u256(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_values() {
        let expected = [0u128, 1, 1, 1, 2, 2, 2, 2, 2, 3, 3];
        for (n, root) in expected.iter().enumerate() {
            assert_eq!(isqrt(Amount::new(n as u128)), Amount::new(*root), "n = {n}");
        }
    }

    #[test]
    fn perfect_squares() {
        assert_eq!(isqrt(Amount::new(1_000_000 * 1_000_000)), Amount::new(1_000_000));
    }

    #[test]
    fn reference_first_deposit() {
        // sqrt(100e18 * 200e18) = sqrt(2) * 1e20 = 141421356237309504880.16...
        let e18 = 1_000_000_000_000_000_000u128;
        let Some(product) = Amount::new(100 * e18).checked_mul(&Amount::new(200 * e18)) else {
            panic!("product fits in 256 bits");
        };
        assert_eq!(isqrt(product), Amount::new(141_421_356_237_309_504_880));
    }

    #[test]
    fn max_value_does_not_overflow() {
        let root = isqrt(Amount::MAX);
        // (2^128 - 1)^2 <= 2^256 - 1 < (2^128)^2
        assert_eq!(root, Amount::new(u128::MAX));
    }

    #[test]
    fn floor_property_on_sample() {
        for n in [2u128, 99, 12_345, 999_999_937, u64::MAX as u128] {
            let r = isqrt(Amount::new(n)).get();
            let n = U256::from(n);
            assert!(r * r <= n);
            assert!((r + U256::from(1u8)) * (r + U256::from(1u8)) > n);
        }
    }
}
