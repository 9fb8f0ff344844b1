//! Single fungible token ledger with balances and allowances.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::LedgerError;
use crate::domain::{Address, Amount, Decimals};

/// Balances, allowances and supply of one fungible token.
///
/// The engine uses one instance as its liquidity-share ledger, and
/// [`InMemoryLedger`](super::InMemoryLedger) keeps one per registered asset.
///
/// # Invariant
///
/// The sum of all balances equals [`TokenLedger::total_supply`]. Only
/// [`mint`](Self::mint) and [`burn`](Self::burn) change the supply; transfers
/// move balances between holders.
///
/// # Rollback
///
/// [`checkpoint`](Self::checkpoint) opens an undo journal that records the
/// prior value of every entry written afterwards.
/// [`rollback`](Self::rollback) replays it backwards and
/// [`commit`](Self::commit) discards it, so undoing an operation costs only
/// the entries it touched.
///
/// # Examples
///
/// ```
/// use pairswap::domain::{Address, Amount, Decimals};
/// use pairswap::ledger::TokenLedger;
///
/// let alice = Address::repeat_byte(0xa1);
/// let bob = Address::repeat_byte(0xb0);
/// let mut ltk = TokenLedger::new("Liquidity Token", "LTK", Decimals::MAX);
/// ltk.mint(&alice, Amount::new(100)).expect("mint");
/// ltk.transfer(&alice, &bob, Amount::new(40)).expect("transfer");
/// assert_eq!(ltk.balance_of(&bob), Amount::new(40));
/// assert_eq!(ltk.total_supply(), Amount::new(100));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenLedger {
    name: String,
    symbol: String,
    decimals: Decimals,
    total_supply: Amount,
    balances: HashMap<Address, Amount>,
    allowances: HashMap<Address, HashMap<Address, Amount>>,
    #[serde(skip)]
    journal: Option<Vec<Undo>>,
}

/// Prior value of one entry overwritten while a checkpoint is open.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Undo {
    Supply(Amount),
    Balance(Address, Option<Amount>),
    Allowance(Address, Address, Option<Amount>),
}

impl TokenLedger {
    /// Creates an empty ledger with the given metadata.
    #[must_use]
    pub fn new(name: impl Into<String>, symbol: impl Into<String>, decimals: Decimals) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            decimals,
            total_supply: Amount::ZERO,
            balances: HashMap::new(),
            allowances: HashMap::new(),
            journal: None,
        }
    }

    /// Returns the token name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the token symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Returns the token's decimal places.
    #[must_use]
    pub const fn decimals(&self) -> Decimals {
        self.decimals
    }

    /// Returns the outstanding supply.
    pub const fn total_supply(&self) -> Amount {
        self.total_supply
    }

    /// Returns the balance of `holder` (zero if unknown).
    pub fn balance_of(&self, holder: &Address) -> Amount {
        self.balances.get(holder).copied().unwrap_or_default()
    }

    /// Returns how much `spender` may move on behalf of `owner`.
    pub fn allowance(&self, owner: &Address, spender: &Address) -> Amount {
        self.allowances
            .get(owner)
            .and_then(|spenders| spenders.get(spender))
            .copied()
            .unwrap_or_default()
    }

    /// Returns the sum of all balances.
    ///
    /// Equal to [`total_supply`](Self::total_supply) by invariant; exposed so
    /// tests and audits can verify it.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Overflow`] if the sum exceeds 256 bits.
    pub fn sum_of_balances(&self) -> Result<Amount, LedgerError> {
        self.balances
            .values()
            .try_fold(Amount::ZERO, |acc, b| acc.checked_add(b))
            .ok_or(LedgerError::Overflow)
    }

    /// Sets the allowance of `spender` over `owner`'s balance.
    pub fn approve(&mut self, owner: &Address, spender: &Address, amount: Amount) {
        let prior = self
            .allowances
            .entry(*owner)
            .or_default()
            .insert(*spender, amount);
        self.record(Undo::Allowance(*owner, *spender, prior));
    }

    /// Creates `amount` new tokens for `to`.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Overflow`] if the supply would exceed 256 bits.
    pub fn mint(&mut self, to: &Address, amount: Amount) -> Result<(), LedgerError> {
        let supply = self
            .total_supply
            .checked_add(&amount)
            .ok_or(LedgerError::Overflow)?;
        // balance <= supply, so this cannot overflow once the supply fits.
        let balance = self
            .balance_of(to)
            .checked_add(&amount)
            .ok_or(LedgerError::Overflow)?;
        self.write_supply(supply);
        self.write_balance(to, balance);
        Ok(())
    }

    /// Destroys `amount` tokens held by `from`.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InsufficientBalance`] if `from` holds less.
    pub fn burn(&mut self, from: &Address, amount: Amount) -> Result<(), LedgerError> {
        let balance = self
            .balance_of(from)
            .checked_sub(&amount)
            .ok_or(LedgerError::InsufficientBalance)?;
        let supply = self
            .total_supply
            .checked_sub(&amount)
            .ok_or(LedgerError::InsufficientBalance)?;
        self.write_balance(from, balance);
        self.write_supply(supply);
        Ok(())
    }

    /// Moves `amount` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InsufficientBalance`] if `from` holds less.
    pub fn transfer(
        &mut self,
        from: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let from_balance = self
            .balance_of(from)
            .checked_sub(&amount)
            .ok_or(LedgerError::InsufficientBalance)?;
        self.write_balance(from, from_balance);
        // Conservation of supply bounds every balance, so no overflow here.
        let to_balance = self
            .balance_of(to)
            .checked_add(&amount)
            .ok_or(LedgerError::Overflow)?;
        self.write_balance(to, to_balance);
        Ok(())
    }

    /// Moves `amount` from `owner` to `to` using `spender`'s allowance.
    ///
    /// The allowance is consumed only if the transfer succeeds.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::InsufficientAllowance`] if the allowance is too low.
    /// - [`LedgerError::InsufficientBalance`] if `owner` holds less.
    pub fn transfer_from(
        &mut self,
        spender: &Address,
        owner: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let remaining = self
            .allowance(owner, spender)
            .checked_sub(&amount)
            .ok_or(LedgerError::InsufficientAllowance)?;
        self.transfer(owner, to, amount)?;
        self.approve(owner, spender, remaining);
        Ok(())
    }

    // -- rollback --------------------------------------------------------------

    /// Starts recording writes so they can be undone. Any journal already
    /// open is discarded.
    pub fn checkpoint(&mut self) {
        self.journal = Some(Vec::new());
    }

    /// Keeps every write since [`checkpoint`](Self::checkpoint).
    pub fn commit(&mut self) {
        self.journal = None;
    }

    /// Undoes every write since [`checkpoint`](Self::checkpoint). Without an
    /// open checkpoint this does nothing.
    pub fn rollback(&mut self) {
        let Some(journal) = self.journal.take() else {
            return;
        };
        for undo in journal.into_iter().rev() {
            match undo {
                Undo::Supply(prior) => self.total_supply = prior,
                Undo::Balance(holder, Some(prior)) => {
                    self.balances.insert(holder, prior);
                }
                Undo::Balance(holder, None) => {
                    self.balances.remove(&holder);
                }
                Undo::Allowance(owner, spender, prior) => {
                    let spenders = self.allowances.entry(owner).or_default();
                    match prior {
                        Some(prior) => {
                            spenders.insert(spender, prior);
                        }
                        None => {
                            spenders.remove(&spender);
                        }
                    }
                    if spenders.is_empty() {
                        self.allowances.remove(&owner);
                    }
                }
            }
        }
    }

    fn record(&mut self, undo: Undo) {
        if let Some(journal) = self.journal.as_mut() {
            journal.push(undo);
        }
    }

    fn write_balance(&mut self, holder: &Address, value: Amount) {
        let prior = self.balances.insert(*holder, value);
        self.record(Undo::Balance(*holder, prior));
    }

    fn write_supply(&mut self, value: Amount) {
        let prior = std::mem::replace(&mut self.total_supply, value);
        self.record(Undo::Supply(prior));
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn alice() -> Address {
        Address::repeat_byte(0xa1)
    }

    fn bob() -> Address {
        Address::repeat_byte(0xb0)
    }

    fn funded(amount: u128) -> TokenLedger {
        let mut t = TokenLedger::new("Token ETH", "TETH", Decimals::MAX);
        let Ok(()) = t.mint(&alice(), Amount::new(amount)) else {
            panic!("mint");
        };
        t
    }

    #[test]
    fn metadata() {
        let t = TokenLedger::new("Liquidity Token", "LTK", Decimals::MAX);
        assert_eq!(t.name(), "Liquidity Token");
        assert_eq!(t.symbol(), "LTK");
        assert_eq!(t.decimals(), Decimals::MAX);
        assert!(t.total_supply().is_zero());
    }

    #[test]
    fn mint_increases_supply_and_balance() {
        let t = funded(500);
        assert_eq!(t.total_supply(), Amount::new(500));
        assert_eq!(t.balance_of(&alice()), Amount::new(500));
        assert_eq!(t.balance_of(&bob()), Amount::ZERO);
    }

    #[test]
    fn mint_overflow_leaves_state() {
        let mut t = funded(1);
        assert_eq!(t.mint(&bob(), Amount::MAX), Err(LedgerError::Overflow));
        assert_eq!(t.total_supply(), Amount::new(1));
        assert_eq!(t.balance_of(&bob()), Amount::ZERO);
    }

    #[test]
    fn burn_reduces_supply() {
        let mut t = funded(500);
        assert_eq!(t.burn(&alice(), Amount::new(200)), Ok(()));
        assert_eq!(t.total_supply(), Amount::new(300));
        assert_eq!(t.burn(&alice(), Amount::new(301)), Err(LedgerError::InsufficientBalance));
        assert_eq!(t.total_supply(), Amount::new(300));
    }

    #[test]
    fn transfer_conserves_supply() {
        let mut t = funded(500);
        assert_eq!(t.transfer(&alice(), &bob(), Amount::new(120)), Ok(()));
        assert_eq!(t.balance_of(&alice()), Amount::new(380));
        assert_eq!(t.balance_of(&bob()), Amount::new(120));
        assert_eq!(t.sum_of_balances(), Ok(t.total_supply()));
    }

    #[test]
    fn transfer_to_self_is_noop() {
        let mut t = funded(500);
        assert_eq!(t.transfer(&alice(), &alice(), Amount::new(500)), Ok(()));
        assert_eq!(t.balance_of(&alice()), Amount::new(500));
    }

    #[test]
    fn transfer_insufficient_balance() {
        let mut t = funded(10);
        assert_eq!(
            t.transfer(&alice(), &bob(), Amount::new(11)),
            Err(LedgerError::InsufficientBalance)
        );
    }

    #[test]
    fn transfer_from_consumes_allowance() {
        let mut t = funded(100);
        t.approve(&alice(), &bob(), Amount::new(60));
        assert_eq!(t.allowance(&alice(), &bob()), Amount::new(60));
        assert_eq!(t.transfer_from(&bob(), &alice(), &bob(), Amount::new(50)), Ok(()));
        assert_eq!(t.allowance(&alice(), &bob()), Amount::new(10));
        assert_eq!(t.balance_of(&bob()), Amount::new(50));
    }

    #[test]
    fn transfer_from_without_allowance() {
        let mut t = funded(100);
        assert_eq!(
            t.transfer_from(&bob(), &alice(), &bob(), Amount::new(1)),
            Err(LedgerError::InsufficientAllowance)
        );
    }

    #[test]
    fn failed_transfer_from_keeps_allowance() {
        let mut t = funded(10);
        t.approve(&alice(), &bob(), Amount::new(50));
        assert_eq!(
            t.transfer_from(&bob(), &alice(), &bob(), Amount::new(20)),
            Err(LedgerError::InsufficientBalance)
        );
        assert_eq!(t.allowance(&alice(), &bob()), Amount::new(50));
    }

    // -- rollback --------------------------------------------------------------

    #[test]
    fn rollback_restores_touched_entries() {
        let mut t = funded(100);
        let before = t.clone();
        t.checkpoint();
        t.approve(&alice(), &bob(), Amount::new(30));
        let Ok(()) = t.transfer_from(&bob(), &alice(), &bob(), Amount::new(30)) else {
            panic!("transfer_from");
        };
        let Ok(()) = t.mint(&bob(), Amount::new(5)) else {
            panic!("mint");
        };
        let Ok(()) = t.burn(&alice(), Amount::new(10)) else {
            panic!("burn");
        };
        t.rollback();
        assert_eq!(t, before);
    }

    #[test]
    fn commit_keeps_writes() {
        let mut t = funded(100);
        t.checkpoint();
        let Ok(()) = t.transfer(&alice(), &bob(), Amount::new(40)) else {
            panic!("transfer");
        };
        t.commit();
        t.rollback();
        assert_eq!(t.balance_of(&bob()), Amount::new(40));
        assert_eq!(t.balance_of(&alice()), Amount::new(60));
    }

    #[test]
    fn writes_outside_checkpoint_are_not_journaled() {
        let mut t = funded(100);
        let Ok(()) = t.transfer(&alice(), &bob(), Amount::new(1)) else {
            panic!("transfer");
        };
        t.checkpoint();
        t.rollback();
        assert_eq!(t.balance_of(&bob()), Amount::new(1));
    }
}
