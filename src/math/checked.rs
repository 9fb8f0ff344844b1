//! Checked arithmetic trait for [`Amount`].
//!
//! The [`CheckedArithmetic`] trait turns the `Option`-returning primitives
//! on [`Amount`] into [`Result`]s carrying a specific [`AmmError`] variant,
//! so engine code can propagate failures with `?`.
//!
//! # Examples
//!
//! ```
//! use pairswap::domain::Amount;
//! use pairswap::math::CheckedArithmetic;
//!
//! let sum = Amount::new(100).safe_add(&Amount::new(200));
//! assert_eq!(sum, Ok(Amount::new(300)));
//! ```

use crate::domain::Amount;
use crate::error::AmmError;

/// `Result`-returning arithmetic over 256-bit amounts.
///
/// Every method fails with a distinct [`AmmError`] variant and never
/// saturates or panics. Division always floors.
pub trait CheckedArithmetic: Sized {
    /// `self + other`.
    ///
    /// # Errors
    ///
    /// [`AmmError::Overflow`] past 256 bits.
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError>;

    /// `self - other`.
    ///
    /// # Errors
    ///
    /// [`AmmError::Underflow`] when `other > self`.
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError>;

    /// `self * other`.
    ///
    /// # Errors
    ///
    /// [`AmmError::Overflow`] past 256 bits.
    fn safe_mul(&self, other: &Self) -> Result<Self, AmmError>;

    /// `floor(self / other)`.
    ///
    /// # Errors
    ///
    /// [`AmmError::DivisionByZero`] when `other` is zero.
    fn safe_div(&self, other: &Self) -> Result<Self, AmmError>;

    /// Computes `floor(self * numerator / denominator)`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Overflow`] if `self * numerator` exceeds 256 bits.
    /// - [`AmmError::DivisionByZero`] if `denominator` is zero.
    fn mul_div(&self, numerator: &Self, denominator: &Self) -> Result<Self, AmmError> {
        self.safe_mul(numerator)?.safe_div(denominator)
    }
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::Overflow("amount sum exceeds 256 bits"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::Underflow("amount difference below zero"))
    }

    #[inline]
    fn safe_mul(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_mul(other)
            .ok_or(AmmError::Overflow("amount product exceeds 256 bits"))
    }

    #[inline]
    fn safe_div(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_div(other).ok_or(AmmError::DivisionByZero)
    }
}
