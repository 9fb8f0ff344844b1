//! Arithmetic utilities for pool calculations.
//!
//! - [`CheckedArithmetic`]: overflow-safe operations on [`Amount`](crate::domain::Amount).
//! - [`isqrt`]: integer square root for first-deposit share issuance.
//! - [`quote_output`], [`spot_price`], [`proportional`]: constant-product pricing.
//! - [`min_output_with_tolerance`]: client-side slippage floor.
//!
//! All arithmetic is 256-bit integer math with floor division.

mod checked;
mod pricing;
mod sqrt;

pub use checked::CheckedArithmetic;
pub use pricing::{min_output_with_tolerance, proportional, quote_output, spot_price};
pub use sqrt::isqrt;
