//! Thread-safe handle around a [`SwapEngine`].

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use super::SwapEngine;
use crate::clock::SystemClock;
use crate::domain::{
    AddLiquidity, Address, Amount, Deposit, Price, RemoveLiquidity, SwapExactIn, SwapOutcome,
    Withdrawal,
};
use crate::error::Result;
use crate::traits::{AssetLedger, Clock};

/// Cloneable handle that serializes every engine call behind one lock.
///
/// Each operation holds the lock for its whole duration, so concurrent
/// callers observe operations one at a time, each either fully applied or
/// not at all. Use [`lock`](Self::lock) or [`with`](Self::with) to run
/// several calls under a single acquisition.
pub struct SharedEngine<L, C = SystemClock> {
    inner: Arc<Mutex<SwapEngine<L, C>>>,
}

impl<L, C> Clone for SharedEngine<L, C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<L: AssetLedger, C: Clock> SharedEngine<L, C> {
    /// Wraps `engine` for shared use.
    #[must_use]
    pub fn new(engine: SwapEngine<L, C>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    /// Acquires the engine lock.
    pub fn lock(&self) -> MutexGuard<'_, SwapEngine<L, C>> {
        self.inner.lock()
    }

    /// Runs `f` with exclusive access to the engine.
    pub fn with<R>(&self, f: impl FnOnce(&mut SwapEngine<L, C>) -> R) -> R {
        f(&mut *self.inner.lock())
    }

    /// See [`SwapEngine::add_liquidity`].
    ///
    /// # Errors
    ///
    /// As [`SwapEngine::add_liquidity`].
    pub fn add_liquidity(&self, caller: &Address, request: &AddLiquidity) -> Result<Deposit> {
        self.inner.lock().add_liquidity(caller, request)
    }

    /// See [`SwapEngine::remove_liquidity`].
    ///
    /// # Errors
    ///
    /// As [`SwapEngine::remove_liquidity`].
    pub fn remove_liquidity(
        &self,
        caller: &Address,
        request: &RemoveLiquidity,
    ) -> Result<Withdrawal> {
        self.inner.lock().remove_liquidity(caller, request)
    }

    /// See [`SwapEngine::swap_exact_tokens_for_tokens`].
    ///
    /// # Errors
    ///
    /// As [`SwapEngine::swap_exact_tokens_for_tokens`].
    pub fn swap_exact_tokens_for_tokens(
        &self,
        caller: &Address,
        request: &SwapExactIn,
    ) -> Result<SwapOutcome> {
        self.inner.lock().swap_exact_tokens_for_tokens(caller, request)
    }

    /// See [`SwapEngine::reserve`].
    pub fn reserve(&self, asset: &Address, counter: &Address) -> Amount {
        self.inner.lock().reserve(asset, counter)
    }

    /// See [`SwapEngine::spot_price`].
    ///
    /// # Errors
    ///
    /// As [`SwapEngine::spot_price`].
    pub fn spot_price(&self, base: &Address, quote: &Address) -> Result<Price> {
        self.inner.lock().spot_price(base, quote)
    }

    /// See [`SwapEngine::total_shares`].
    pub fn total_shares(&self) -> Amount {
        self.inner.lock().total_shares()
    }

    /// See [`SwapEngine::share_balance_of`].
    pub fn share_balance_of(&self, holder: &Address) -> Amount {
        self.inner.lock().share_balance_of(holder)
    }
}

impl<L, C> From<SwapEngine<L, C>> for SharedEngine<L, C> {
    fn from(engine: SwapEngine<L, C>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }
}
