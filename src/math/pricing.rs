//! Constant-product pricing: quotes, spot prices, and proportional sizing.
//!
//! Every function here is pure and uses floor division, so results always
//! round in the pool's favour: outputs and minted shares never round up.
//!
//! # Formulas
//!
//! ```text
//! quote_output  = floor(amount_in * reserve_out / (reserve_in + amount_in))
//! spot_price    = floor(reserve_quote * SCALE / reserve_base)
//! proportional  = floor(amount * reserve_to / reserve_from)
//! ```

use super::CheckedArithmetic;
use crate::domain::{Amount, BasisPoints, Decimals, Price};
use crate::error::AmmError;

/// Output of an exact-input trade against a constant-product pool.
///
/// Returns zero (not an error) when `amount_in` or `reserve_out` is zero so
/// callers can probe degenerate inputs without error handling.
///
/// # Errors
///
/// Returns [`AmmError::Overflow`] if `amount_in * reserve_out` or
/// `reserve_in + amount_in` exceeds 256 bits.
///
/// # Examples
///
/// ```
/// use pairswap::domain::Amount;
/// use pairswap::math::quote_output;
///
/// // 10 * 200 / (100 + 10) = 18.18 -> 18
/// let out = quote_output(Amount::new(10), Amount::new(100), Amount::new(200));
/// assert_eq!(out, Ok(Amount::new(18)));
/// assert_eq!(quote_output(Amount::ZERO, Amount::new(100), Amount::new(200)), Ok(Amount::ZERO));
/// ```
pub fn quote_output(
    amount_in: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
) -> Result<Amount, AmmError> {
    if amount_in.is_zero() || reserve_out.is_zero() {
        return Ok(Amount::ZERO);
    }
    let numerator = amount_in
        .checked_mul(&reserve_out)
        .ok_or(AmmError::Overflow("quote numerator overflow"))?;
    let denominator = reserve_in
        .checked_add(&amount_in)
        .ok_or(AmmError::Overflow("quote denominator overflow"))?;
    numerator.safe_div(&denominator)
}

/// Price of one unit of the base asset in units of the quote asset.
///
/// Computes `floor(reserve_quote * 10^decimals / reserve_base)`.
///
/// # Errors
///
/// - [`AmmError::InsufficientReserves`] if either reserve is zero.
/// - [`AmmError::Overflow`] if the scaled numerator exceeds 256 bits.
pub fn spot_price(
    reserve_base: Amount,
    reserve_quote: Amount,
    decimals: Decimals,
) -> Result<Price, AmmError> {
    if reserve_base.is_zero() || reserve_quote.is_zero() {
        return Err(AmmError::InsufficientReserves);
    }
    let scaled = reserve_quote
        .checked_mul(&decimals.factor())
        .ok_or(AmmError::Overflow("spot price numerator overflow"))?;
    Ok(Price::new(scaled.safe_div(&reserve_base)?, decimals))
}

/// Amount of the other asset matching `amount` at the current reserve ratio.
///
/// Computes `floor(amount * reserve_to / reserve_from)`.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `reserve_from` is zero.
/// - [`AmmError::Overflow`] if the product exceeds 256 bits.
pub fn proportional(
    amount: Amount,
    reserve_from: Amount,
    reserve_to: Amount,
) -> Result<Amount, AmmError> {
    amount.mul_div(&reserve_to, &reserve_from)
}

/// Lowest output a caller accepts given a quote and a tolerance.
///
/// Computes `amount_out - floor(amount_out * tolerance / 10_000)`, the floor
/// a client passes as `amount_out_min`.
///
/// # Errors
///
/// - [`AmmError::InvalidConfiguration`] if `tolerance` exceeds 100%.
/// - [`AmmError::Overflow`] if `amount_out * tolerance` exceeds 256 bits.
///
/// # Examples
///
/// ```
/// use pairswap::domain::{Amount, BasisPoints};
/// use pairswap::math::min_output_with_tolerance;
///
/// let floor = min_output_with_tolerance(Amount::new(1_000), BasisPoints::new(100));
/// assert_eq!(floor, Ok(Amount::new(990)));
/// ```
pub fn min_output_with_tolerance(
    amount_out: Amount,
    tolerance: BasisPoints,
) -> Result<Amount, AmmError> {
    if !tolerance.is_valid_percent() {
        return Err(AmmError::InvalidConfiguration(
            "slippage tolerance must be at most 10000bp",
        ));
    }
    amount_out.safe_sub(&tolerance.apply(amount_out)?)
}
