//! Asset ledger abstraction used by the engine to move pool assets.
//!
//! The engine never owns asset balances itself. Every deposit is pulled from
//! the caller with [`AssetLedger::transfer_from`] (the engine acting as
//! spender on an allowance the caller granted beforehand) and every payout is
//! pushed with [`AssetLedger::transfer`] from the engine's own holder
//! address.
//!
//! # Atomicity
//!
//! An engine operation may issue several ledger calls. The engine opens a
//! [`checkpoint`](AssetLedger::checkpoint) before the first call and either
//! [`commit`](AssetLedger::commit)s or [`rollback`](AssetLedger::rollback)s
//! it, so a failed operation leaves no partial transfer behind.

use crate::domain::{Address, Amount};
use crate::ledger::LedgerError;

/// Balance and transfer interface over a set of fungible assets.
///
/// Implementations report their own failures as [`LedgerError`]; the engine
/// propagates them unchanged.
///
/// # Implementors
///
/// - [`InMemoryLedger`](crate::ledger::InMemoryLedger): one
///   [`TokenLedger`](crate::ledger::TokenLedger) per registered asset.
pub trait AssetLedger {
    /// Returns `holder`'s balance of `asset`.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::UnknownAsset`] if `asset` is not tracked.
    fn balance_of(&self, asset: &Address, holder: &Address) -> Result<Amount, LedgerError>;

    /// Moves `amount` of `asset` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::UnknownAsset`] if `asset` is not tracked.
    /// - [`LedgerError::InsufficientBalance`] if `from` holds less.
    fn transfer(
        &mut self,
        asset: &Address,
        from: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<(), LedgerError>;

    /// Moves `amount` of `asset` from `owner` to `to`, spending the allowance
    /// `owner` granted to `spender`.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::UnknownAsset`] if `asset` is not tracked.
    /// - [`LedgerError::InsufficientAllowance`] if the allowance is too low.
    /// - [`LedgerError::InsufficientBalance`] if `owner` holds less.
    fn transfer_from(
        &mut self,
        asset: &Address,
        spender: &Address,
        owner: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<(), LedgerError>;

    /// Starts recording changes so they can be undone.
    ///
    /// Implementations should make rollback cost proportional to the
    /// entries written, not to the size of the ledger.
    fn checkpoint(&mut self);

    /// Keeps every change made since [`checkpoint`](Self::checkpoint).
    fn commit(&mut self);

    /// Undoes every change made since [`checkpoint`](Self::checkpoint).
    fn rollback(&mut self);
}
