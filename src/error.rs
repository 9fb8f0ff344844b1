//! Unified error types for the pairswap engine.
//!
//! All fallible engine operations return [`AmmError`]. Every variant is a
//! hard failure: the operation that produced it has been rolled back and no
//! state (reserves, shares, ledger balances, events) was changed.
//!
//! Ledger collaborator failures are reported as [`AmmError::Ledger`] and carry
//! the collaborator's own [`LedgerError`] unchanged.

use thiserror::Error;

use crate::ledger::LedgerError;

/// Errors produced by the pool engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmmError {
    /// The caller-supplied deadline is earlier than the current time.
    #[error("Transaction expired")]
    Expired,

    /// A required positive input was zero.
    #[error("{0}")]
    ZeroAmount(&'static str),

    /// The swap path does not describe exactly one pair.
    #[error("Only 1-pair swaps allowed")]
    UnsupportedPath,

    /// Both sides of a pair refer to the same asset.
    #[error("Tokens must differ")]
    IdenticalAssets,

    /// A swap was requested against a pool with a zero reserve.
    #[error("Empty reserves")]
    EmptyReserves,

    /// A spot price was requested for a pair with a zero reserve.
    #[error("Insufficient reserves")]
    InsufficientReserves,

    /// The realized swap output is below the caller's minimum.
    #[error("Slippage exceeded")]
    SlippageExceeded,

    /// A deposit or withdrawal amount is below the caller's minimum.
    #[error("{0}")]
    AmountTooLow(&'static str),

    /// No deposit ratio satisfies both the desired caps and the minimums.
    #[error("Amounts do not meet constraints")]
    ConstraintViolation,

    /// A withdrawal of zero shares, or a deposit too small to mint any.
    #[error("Zero liquidity")]
    ZeroLiquidity,

    /// Arithmetic overflow in a checked operation.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Arithmetic underflow in a checked operation.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// Division by zero in a checked operation.
    #[error("division by zero")]
    DivisionByZero,

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// Failure reported by an asset ledger, propagated unchanged.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// Convenience alias used across the crate.
pub type Result<T> = core::result::Result<T, AmmError>;
