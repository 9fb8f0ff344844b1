//! Per-pair reserve bookkeeping.

use std::collections::{HashMap, HashSet};

use crate::domain::{Address, Amount, AssetPair};
use crate::error::Result;
use crate::math::CheckedArithmetic;

type Key = (Address, Address);

/// Reserves keyed by ordered asset pair.
///
/// `get(a, b)` is the amount of asset `a` the engine holds for the pair
/// `{a, b}`; `get(b, a)` is the amount of `b` held for the same pair. The
/// pair-based methods address the `first` side of an [`AssetPair`]; use
/// [`AssetPair::reversed`] for the other. Absent entries read as zero, and
/// entries that reach zero are dropped so an emptied pair looks exactly like
/// one never funded.
///
/// Like [`TokenLedger`](crate::ledger::TokenLedger), the book journals writes
/// between [`checkpoint`](Self::checkpoint) and
/// [`commit`](Self::commit)/[`rollback`](Self::rollback).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReserveBook {
    reserves: HashMap<Key, Amount>,
    journal: Option<Vec<(Key, Option<Amount>)>>,
}

impl ReserveBook {
    /// Creates an empty book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the reserve of `asset` held for the pair `{asset, counter}`.
    pub fn get(&self, asset: &Address, counter: &Address) -> Amount {
        self.reserves
            .get(&(*asset, *counter))
            .copied()
            .unwrap_or_default()
    }

    /// Returns the reserve of `pair.first()` held for `pair`.
    pub fn side(&self, pair: &AssetPair) -> Amount {
        self.get(&pair.first(), &pair.second())
    }

    /// Returns `true` if neither side of `pair` holds anything.
    #[must_use]
    pub fn is_empty_pair(&self, pair: &AssetPair) -> bool {
        self.side(pair).is_zero() && self.side(&pair.reversed()).is_zero()
    }

    /// Number of unordered pairs with at least one non-zero side.
    #[must_use]
    pub fn active_pairs(&self) -> usize {
        self.reserves
            .keys()
            .map(|&(a, b)| if a < b { (a, b) } else { (b, a) })
            .collect::<HashSet<_>>()
            .len()
    }

    /// Adds `amount` to the `pair.first()` side of `pair`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`](crate::error::AmmError::Overflow) if
    /// the reserve would exceed 256 bits.
    pub fn credit(&mut self, pair: &AssetPair, amount: Amount) -> Result<()> {
        let next = self.side(pair).safe_add(&amount)?;
        self.store(pair, next);
        Ok(())
    }

    /// Removes `amount` from the `pair.first()` side of `pair`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Underflow`](crate::error::AmmError::Underflow) if
    /// the reserve holds less than `amount`.
    pub fn debit(&mut self, pair: &AssetPair, amount: Amount) -> Result<()> {
        let next = self.side(pair).safe_sub(&amount)?;
        self.store(pair, next);
        Ok(())
    }

    /// Starts journaling writes. Any journal already open is discarded.
    pub fn checkpoint(&mut self) {
        self.journal = Some(Vec::new());
    }

    /// Keeps every write since [`checkpoint`](Self::checkpoint).
    pub fn commit(&mut self) {
        self.journal = None;
    }

    /// Undoes every write since [`checkpoint`](Self::checkpoint).
    pub fn rollback(&mut self) {
        let Some(journal) = self.journal.take() else {
            return;
        };
        for (key, prior) in journal.into_iter().rev() {
            match prior {
                Some(value) => self.reserves.insert(key, value),
                None => self.reserves.remove(&key),
            };
        }
    }

    fn store(&mut self, pair: &AssetPair, value: Amount) {
        let key = (pair.first(), pair.second());
        let prior = if value.is_zero() {
            self.reserves.remove(&key)
        } else {
            self.reserves.insert(key, value)
        };
        if let Some(journal) = self.journal.as_mut() {
            journal.push((key, prior));
        }
    }
}
