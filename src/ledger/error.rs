//! Ledger collaborator failures.

use thiserror::Error;

use crate::domain::Address;

/// Failures reported by an asset ledger.
///
/// The engine never inspects or rewrites these; they reach the caller inside
/// [`AmmError::Ledger`](crate::error::AmmError::Ledger) exactly as produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The holder's balance is below the requested amount.
    #[error("insufficient balance")]
    InsufficientBalance,

    /// The spender's allowance from the holder is below the requested amount.
    #[error("insufficient allowance")]
    InsufficientAllowance,

    /// No ledger is registered for the asset.
    #[error("unknown asset {0}")]
    UnknownAsset(Address),

    /// A balance or supply would exceed 256 bits.
    #[error("ledger balance overflow")]
    Overflow,
}
