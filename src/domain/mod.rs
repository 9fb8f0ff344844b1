//! Fundamental domain value types used throughout the engine.
//!
//! This module contains the value types that model the exchange: amounts,
//! addresses, ordered asset pairs, fixed-point prices, deadlines, and the
//! request/receipt types of the mutating surface. Newtypes with validated
//! constructors enforce invariants where one exists.

mod amount;
mod asset_pair;
mod basis_points;
mod decimals;
mod liquidity_request;
mod price;
mod swap_request;
mod timestamp;

/// 20-byte account and asset identifier.
///
/// Holders and assets share one address space, as on EVM chains.
pub use alloy_primitives::Address;

pub use amount::Amount;
pub use asset_pair::AssetPair;
pub use basis_points::BasisPoints;
pub use decimals::Decimals;
pub use liquidity_request::{AddLiquidity, Deposit, RemoveLiquidity, Withdrawal};
pub use price::Price;
pub use swap_request::{SwapExactIn, SwapOutcome};
pub use timestamp::Timestamp;
