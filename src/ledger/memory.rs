//! In-memory multi-asset ledger.

use std::collections::HashMap;

use tracing::debug;

use super::{LedgerError, TokenLedger};
use crate::domain::{Address, Amount, Decimals};
use crate::traits::AssetLedger;

/// A set of [`TokenLedger`]s keyed by asset address.
///
/// Assets must be [`register`](Self::register)ed before use; calls on an
/// unregistered address fail with [`LedgerError::UnknownAsset`].
///
/// # Examples
///
/// ```
/// use pairswap::domain::{Address, Amount, Decimals};
/// use pairswap::ledger::InMemoryLedger;
/// use pairswap::traits::AssetLedger;
///
/// let teth = Address::repeat_byte(0x01);
/// let alice = Address::repeat_byte(0xa1);
/// let mut ledger = InMemoryLedger::new();
/// ledger.register(teth, "Token ETH", "TETH", Decimals::MAX);
/// ledger.mint(&teth, &alice, Amount::new(1_000)).expect("mint");
/// assert_eq!(ledger.balance_of(&teth, &alice), Ok(Amount::new(1_000)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryLedger {
    tokens: HashMap<Address, TokenLedger>,
}

impl InMemoryLedger {
    /// Creates a ledger with no registered assets.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `asset` with the given metadata.
    ///
    /// Re-registering an existing asset keeps its balances and returns
    /// `false`.
    pub fn register(
        &mut self,
        asset: Address,
        name: impl Into<String>,
        symbol: impl Into<String>,
        decimals: Decimals,
    ) -> bool {
        if self.tokens.contains_key(&asset) {
            return false;
        }
        let token = TokenLedger::new(name, symbol, decimals);
        debug!(%asset, symbol = token.symbol(), "registered asset");
        self.tokens.insert(asset, token);
        true
    }

    /// Returns the ledger for `asset`, if registered.
    #[must_use]
    pub fn token(&self, asset: &Address) -> Option<&TokenLedger> {
        self.tokens.get(asset)
    }

    /// Creates `amount` of `asset` for `to`.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::UnknownAsset`] if `asset` is not registered.
    /// - [`LedgerError::Overflow`] if the supply would exceed 256 bits.
    pub fn mint(&mut self, asset: &Address, to: &Address, amount: Amount) -> Result<(), LedgerError> {
        self.token_mut(asset)?.mint(to, amount)
    }

    /// Sets the allowance of `spender` over `owner`'s `asset` balance.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::UnknownAsset`] if `asset` is not registered.
    pub fn approve(
        &mut self,
        asset: &Address,
        owner: &Address,
        spender: &Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        self.token_mut(asset)?.approve(owner, spender, amount);
        Ok(())
    }

    /// Returns the allowance of `spender` over `owner`'s `asset` balance.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::UnknownAsset`] if `asset` is not registered.
    pub fn allowance(
        &self,
        asset: &Address,
        owner: &Address,
        spender: &Address,
    ) -> Result<Amount, LedgerError> {
        Ok(self.token_ref(asset)?.allowance(owner, spender))
    }

    /// Returns the outstanding supply of `asset`.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::UnknownAsset`] if `asset` is not registered.
    pub fn total_supply(&self, asset: &Address) -> Result<Amount, LedgerError> {
        Ok(self.token_ref(asset)?.total_supply())
    }

    fn token_ref(&self, asset: &Address) -> Result<&TokenLedger, LedgerError> {
        self.tokens
            .get(asset)
            .ok_or(LedgerError::UnknownAsset(*asset))
    }

    fn token_mut(&mut self, asset: &Address) -> Result<&mut TokenLedger, LedgerError> {
        self.tokens
            .get_mut(asset)
            .ok_or(LedgerError::UnknownAsset(*asset))
    }
}

impl AssetLedger for InMemoryLedger {
    fn balance_of(&self, asset: &Address, holder: &Address) -> Result<Amount, LedgerError> {
        Ok(self.token_ref(asset)?.balance_of(holder))
    }

    fn transfer(
        &mut self,
        asset: &Address,
        from: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        self.token_mut(asset)?.transfer(from, to, amount)
    }

    fn transfer_from(
        &mut self,
        asset: &Address,
        spender: &Address,
        owner: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        self.token_mut(asset)?
            .transfer_from(spender, owner, to, amount)
    }

    fn checkpoint(&mut self) {
        self.tokens.values_mut().for_each(TokenLedger::checkpoint);
    }

    fn commit(&mut self) {
        self.tokens.values_mut().for_each(TokenLedger::commit);
    }

    fn rollback(&mut self) {
        self.tokens.values_mut().for_each(TokenLedger::rollback);
    }
}
