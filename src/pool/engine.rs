//! The constant-product swap engine.
//!
//! [`SwapEngine`] owns the reserve book, the liquidity-share ledger and the
//! event log, and moves pool assets through an [`AssetLedger`]. Every
//! mutating operation is all-or-nothing: on any error the ledger, reserves,
//! shares and event log are restored to their state before the call.
//!
//! # Formulas
//!
//! ```text
//! first deposit:   shares = floor(sqrt(amount_a * amount_b))
//! later deposit:   shares = floor(total * amount_a / reserve_a), amounts fitted to the ratio
//! withdrawal:      amount_x = floor(shares * reserve_x / total)
//! swap:            amount_out = floor(amount_in * reserve_out / (reserve_in + amount_in))
//! spot price:      floor(reserve(B, A) * 10^decimals / reserve(A, B))
//! ```
//!
//! All rounding is toward zero, so the pool never pays out more than the
//! exact rational amount.

use tracing::{debug, info, warn};

use super::ReserveBook;
use crate::clock::SystemClock;
use crate::config::EngineConfig;
use crate::domain::{
    AddLiquidity, Address, Amount, AssetPair, Deposit, Price, RemoveLiquidity, SwapExactIn,
    SwapOutcome, Timestamp, Withdrawal,
};
use crate::error::{AmmError, Result};
use crate::events::PoolEvent;
use crate::ledger::{LedgerError, TokenLedger};
use crate::math::{self, isqrt, proportional, CheckedArithmetic};
use crate::traits::{AssetLedger, Clock};

/// Constant-product AMM over any number of asset pairs sharing one
/// liquidity-share supply.
///
/// The engine holds pool assets on the ledger under
/// [`EngineConfig::engine_address`]. Callers authorize that address on the
/// ledger before depositing or swapping; the engine then pulls funds with
/// `transfer_from` and pays out with `transfer`.
///
/// Shares are a single supply across all pairs. A holder's claim is
/// `shares / total_shares` of whichever pair they redeem against, which is
/// only sound while one pair is active. Seeding a second pair while shares
/// are outstanding logs a warning.
///
/// Every successful mutation appends a [`PoolEvent`]. The log is unbounded:
/// long-running hosts should drain it with
/// [`take_events`](Self::take_events) as they forward events.
///
/// # Examples
///
/// ```
/// use pairswap::clock::ManualClock;
/// use pairswap::config::EngineConfig;
/// use pairswap::domain::{AddLiquidity, Address, Amount, Decimals, Timestamp};
/// use pairswap::ledger::InMemoryLedger;
/// use pairswap::pool::SwapEngine;
///
/// let (teth, tkipu) = (Address::repeat_byte(1), Address::repeat_byte(2));
/// let alice = Address::repeat_byte(0xa1);
/// let config = EngineConfig::default();
/// let engine_addr = config.engine_address;
///
/// let mut ledger = InMemoryLedger::new();
/// for token in [teth, tkipu] {
///     ledger.register(token, "Token", "TKN", Decimals::MAX);
///     ledger.mint(&token, &alice, Amount::new(1_000)).expect("mint");
///     ledger.approve(&token, &alice, &engine_addr, Amount::new(1_000)).expect("approve");
/// }
///
/// let clock = ManualClock::new(Timestamp::new(100));
/// let mut engine = SwapEngine::new(config, ledger, clock).expect("valid config");
/// let request = AddLiquidity::exact(
///     teth, tkipu, Amount::new(100), Amount::new(400), alice, Timestamp::new(200),
/// );
/// let deposit = engine.add_liquidity(&alice, &request).expect("deposit");
/// assert_eq!(deposit.shares, Amount::new(200));
/// assert_eq!(engine.reserve(&tkipu, &teth), Amount::new(400));
/// ```
#[derive(Debug)]
pub struct SwapEngine<L, C = SystemClock> {
    config: EngineConfig,
    ledger: L,
    clock: C,
    reserves: ReserveBook,
    shares: TokenLedger,
    events: Vec<PoolEvent>,
}

impl<L: AssetLedger> SwapEngine<L, SystemClock> {
    /// Creates an engine that checks deadlines against wall-clock time.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `config` is invalid.
    pub fn with_system_clock(config: EngineConfig, ledger: L) -> Result<Self> {
        Self::new(config, ledger, SystemClock)
    }
}

impl<L: AssetLedger, C: Clock> SwapEngine<L, C> {
    /// Creates an engine with empty reserves and no shares outstanding.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `config` is invalid.
    pub fn new(config: EngineConfig, ledger: L, clock: C) -> Result<Self> {
        config.validate()?;
        let shares = TokenLedger::new(
            config.share_token.name.clone(),
            config.share_token.symbol.clone(),
            config.share_token.decimals,
        );
        info!(
            engine = %config.engine_address,
            share_symbol = %config.share_token.symbol,
            "swap engine created"
        );
        Ok(Self {
            config,
            ledger,
            clock,
            reserves: ReserveBook::new(),
            shares,
            events: Vec::new(),
        })
    }

    // -- mutating surface ------------------------------------------------------

    /// Deposits both assets of a pair and mints shares to `request.to`.
    ///
    /// On an empty pair the desired amounts are taken as-is. On a funded pair
    /// the deposit is fitted to the current reserve ratio: `amount_a_desired`
    /// with its matching B amount if that fits under `amount_b_desired`,
    /// otherwise `amount_b_desired` with its matching A amount.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Expired`] if the deadline has passed.
    /// - [`AmmError::IdenticalAssets`] if `token_a == token_b`.
    /// - [`AmmError::AmountTooLow`] on an empty pair if a desired amount is
    ///   below its minimum.
    /// - [`AmmError::ConstraintViolation`] on a funded pair if the fitted
    ///   amounts miss a minimum.
    /// - [`AmmError::ZeroLiquidity`] if the deposit would mint no shares.
    /// - [`AmmError::Ledger`] if pulling either asset fails.
    pub fn add_liquidity(&mut self, caller: &Address, request: &AddLiquidity) -> Result<Deposit> {
        self.atomically("add_liquidity", |engine| {
            engine.execute_add_liquidity(caller, request)
        })
    }

    /// Burns `request.shares` from `caller` and pays the proportional part of
    /// both reserves to `request.to`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Expired`] if the deadline has passed.
    /// - [`AmmError::ZeroLiquidity`] if `request.shares` is zero.
    /// - [`AmmError::IdenticalAssets`] if `token_a == token_b`.
    /// - [`AmmError::AmountTooLow`] if either payout is below its minimum.
    /// - [`AmmError::Ledger`] with [`LedgerError::InsufficientBalance`] if
    ///   `caller` holds fewer shares than requested.
    pub fn remove_liquidity(
        &mut self,
        caller: &Address,
        request: &RemoveLiquidity,
    ) -> Result<Withdrawal> {
        self.atomically("remove_liquidity", |engine| {
            engine.execute_remove_liquidity(caller, request)
        })
    }

    /// Sells exactly `request.amount_in` of `path[0]` for `path[1]`.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    ///
    /// 1. [`AmmError::Expired`] if the deadline has passed.
    /// 2. [`AmmError::ZeroAmount`] if `amount_in` or `amount_out_min` is zero.
    /// 3. [`AmmError::UnsupportedPath`] unless `path` has exactly two entries.
    /// 4. [`AmmError::IdenticalAssets`] if both entries are equal.
    /// 5. [`AmmError::EmptyReserves`] if either reserve of the pair is zero.
    /// 6. [`AmmError::SlippageExceeded`] if the output is below
    ///    `amount_out_min`.
    /// 7. [`AmmError::Ledger`] if pulling the input fails.
    pub fn swap_exact_tokens_for_tokens(
        &mut self,
        caller: &Address,
        request: &SwapExactIn,
    ) -> Result<SwapOutcome> {
        self.atomically("swap", |engine| engine.execute_swap(caller, request))
    }

    // -- queries ---------------------------------------------------------------

    /// Returns the amount of `asset` held for the pair `{asset, counter}`.
    pub fn reserve(&self, asset: &Address, counter: &Address) -> Amount {
        self.reserves.get(asset, counter)
    }

    /// Returns the price of one unit of `base` in units of `quote`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InsufficientReserves`] if either side of the pair
    /// is empty.
    pub fn spot_price(&self, base: &Address, quote: &Address) -> Result<Price> {
        let price = math::spot_price(
            self.reserves.get(base, quote),
            self.reserves.get(quote, base),
            self.config.price_decimals,
        )?;
        debug!(%base, %quote, %price, "spot price");
        Ok(price)
    }

    /// Output of an exact-input trade for arbitrary reserves.
    ///
    /// Pure; does not read engine state. Returns zero when `amount_in` or
    /// `reserve_out` is zero.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if an intermediate exceeds 256 bits.
    pub fn quote_output(
        amount_in: Amount,
        reserve_in: Amount,
        reserve_out: Amount,
    ) -> Result<Amount> {
        math::quote_output(amount_in, reserve_in, reserve_out)
    }

    /// Returns the number of pairs currently holding reserves.
    #[must_use]
    pub fn active_pairs(&self) -> usize {
        self.reserves.active_pairs()
    }

    // -- liquidity shares ------------------------------------------------------

    /// Returns the outstanding share supply.
    pub fn total_shares(&self) -> Amount {
        self.shares.total_supply()
    }

    /// Returns `holder`'s share balance.
    pub fn share_balance_of(&self, holder: &Address) -> Amount {
        self.shares.balance_of(holder)
    }

    /// Returns the share token ledger (metadata, balances, allowances).
    #[must_use]
    pub const fn share_token(&self) -> &TokenLedger {
        &self.shares
    }

    /// Moves shares from `caller` to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Ledger`] if `caller` holds fewer than `amount`.
    pub fn transfer_shares(&mut self, caller: &Address, to: &Address, amount: Amount) -> Result<()> {
        self.shares.transfer(caller, to, amount)?;
        debug!(from = %caller, %to, %amount, "shares transferred");
        Ok(())
    }

    /// Lets `spender` move up to `amount` of `owner`'s shares.
    pub fn approve_shares(&mut self, owner: &Address, spender: &Address, amount: Amount) {
        self.shares.approve(owner, spender, amount);
        debug!(%owner, %spender, %amount, "shares approved");
    }

    /// Returns how many of `owner`'s shares `spender` may move.
    pub fn share_allowance(&self, owner: &Address, spender: &Address) -> Amount {
        self.shares.allowance(owner, spender)
    }

    /// Moves `owner`'s shares to `to` on `spender`'s allowance.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Ledger`] if the allowance or balance is too low.
    pub fn transfer_shares_from(
        &mut self,
        spender: &Address,
        owner: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<()> {
        self.shares.transfer_from(spender, owner, to, amount)?;
        debug!(%spender, %owner, %to, %amount, "shares transferred on allowance");
        Ok(())
    }

    // -- events and accessors --------------------------------------------------

    /// Returns every event recorded since creation or the last
    /// [`take_events`](Self::take_events).
    ///
    /// Nothing is evicted automatically; the log grows until drained.
    #[must_use]
    pub fn events(&self) -> &[PoolEvent] {
        &self.events
    }

    /// Drains and returns the event log.
    pub fn take_events(&mut self) -> Vec<PoolEvent> {
        std::mem::take(&mut self.events)
    }

    /// Returns the engine configuration.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the engine's holder address on the asset ledger.
    #[must_use]
    pub const fn engine_address(&self) -> Address {
        self.config.engine_address
    }

    /// Returns the asset ledger.
    #[must_use]
    pub const fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Returns the asset ledger mutably, e.g. to fund or approve accounts.
    pub fn ledger_mut(&mut self) -> &mut L {
        &mut self.ledger
    }

    /// Returns the clock.
    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    // -- internals -------------------------------------------------------------

    /// Runs `body` and rolls every piece of engine state back if it fails.
    ///
    /// Ledger, reserves and shares journal only the entries `body` writes,
    /// so the cost of a rollback does not grow with the number of holders.
    fn atomically<T>(
        &mut self,
        operation: &'static str,
        body: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        self.ledger.checkpoint();
        self.reserves.checkpoint();
        self.shares.checkpoint();
        let events = self.events.len();
        match body(self) {
            Ok(value) => {
                self.ledger.commit();
                self.reserves.commit();
                self.shares.commit();
                Ok(value)
            }
            Err(err) => {
                self.ledger.rollback();
                self.reserves.rollback();
                self.shares.rollback();
                self.events.truncate(events);
                debug!(operation, error = %err, "operation rejected");
                Err(err)
            }
        }
    }

    fn ensure_live(&self, deadline: Timestamp) -> Result<()> {
        let now = self.clock.now();
        if deadline.has_passed(now) {
            return Err(AmmError::Expired);
        }
        Ok(())
    }

    fn execute_add_liquidity(
        &mut self,
        caller: &Address,
        request: &AddLiquidity,
    ) -> Result<Deposit> {
        self.ensure_live(request.deadline)?;
        let pair = request.pair()?;
        let (token_a, token_b) = (pair.first(), pair.second());
        let total = self.shares.total_supply();

        let (amount_a, amount_b, minted) = if self.reserves.is_empty_pair(&pair) {
            let (amount_a, amount_b) = seed_amounts(request)?;
            if !total.is_zero() {
                warn!(
                    %token_a,
                    %token_b,
                    outstanding = %total,
                    active_pairs = self.reserves.active_pairs(),
                    "seeding a new pair while shares are outstanding; shares are one supply across pairs"
                );
            }
            (amount_a, amount_b, isqrt(amount_a.safe_mul(&amount_b)?))
        } else {
            let reserve_a = self.reserves.side(&pair);
            let reserve_b = self.reserves.side(&pair.reversed());
            let (amount_a, amount_b) = fitted_amounts(request, reserve_a, reserve_b)?;
            (amount_a, amount_b, total.mul_div(&amount_a, &reserve_a)?)
        };
        if minted.is_zero() {
            return Err(AmmError::ZeroLiquidity);
        }

        let engine = self.config.engine_address;
        self.ledger
            .transfer_from(&token_a, &engine, caller, &engine, amount_a)?;
        self.ledger
            .transfer_from(&token_b, &engine, caller, &engine, amount_b)?;
        self.reserves.credit(&pair, amount_a)?;
        self.reserves.credit(&pair.reversed(), amount_b)?;
        self.shares.mint(&request.to, minted)?;

        info!(
            provider = %caller,
            to = %request.to,
            %token_a,
            %token_b,
            %amount_a,
            %amount_b,
            shares = %minted,
            "liquidity added"
        );
        self.events.push(PoolEvent::LiquidityAdded {
            provider: *caller,
            to: request.to,
            token_a,
            token_b,
            amount_a,
            amount_b,
            shares_minted: minted,
        });
        Ok(Deposit {
            amount_a,
            amount_b,
            shares: minted,
        })
    }

    fn execute_remove_liquidity(
        &mut self,
        caller: &Address,
        request: &RemoveLiquidity,
    ) -> Result<Withdrawal> {
        self.ensure_live(request.deadline)?;
        if request.shares.is_zero() {
            return Err(AmmError::ZeroLiquidity);
        }
        let pair = request.pair()?;
        let (token_a, token_b) = (pair.first(), pair.second());
        let total = self.shares.total_supply();
        if total.is_zero() {
            return Err(LedgerError::InsufficientBalance.into());
        }

        let amount_a = request
            .shares
            .mul_div(&self.reserves.side(&pair), &total)?;
        let amount_b = request
            .shares
            .mul_div(&self.reserves.side(&pair.reversed()), &total)?;
        if amount_a < request.amount_a_min {
            return Err(AmmError::AmountTooLow("amountA too low"));
        }
        if amount_b < request.amount_b_min {
            return Err(AmmError::AmountTooLow("amountB too low"));
        }

        self.shares.burn(caller, request.shares)?;
        self.reserves.debit(&pair, amount_a)?;
        self.reserves.debit(&pair.reversed(), amount_b)?;
        let engine = self.config.engine_address;
        self.ledger
            .transfer(&token_a, &engine, &request.to, amount_a)?;
        self.ledger
            .transfer(&token_b, &engine, &request.to, amount_b)?;

        info!(
            provider = %caller,
            to = %request.to,
            %token_a,
            %token_b,
            %amount_a,
            %amount_b,
            shares = %request.shares,
            "liquidity removed"
        );
        self.events.push(PoolEvent::LiquidityRemoved {
            provider: *caller,
            to: request.to,
            token_a,
            token_b,
            amount_a,
            amount_b,
            shares_burned: request.shares,
        });
        Ok(Withdrawal { amount_a, amount_b })
    }

    fn execute_swap(&mut self, caller: &Address, request: &SwapExactIn) -> Result<SwapOutcome> {
        self.ensure_live(request.deadline)?;
        if request.amount_in.is_zero() {
            return Err(AmmError::ZeroAmount("Zero amountIn"));
        }
        if request.amount_out_min.is_zero() {
            return Err(AmmError::ZeroAmount("Zero amountOutMin"));
        }
        let hop: AssetPair = request.hop()?;
        let (token_in, token_out) = (hop.first(), hop.second());
        let reserve_in = self.reserves.side(&hop);
        let reserve_out = self.reserves.side(&hop.reversed());
        if reserve_in.is_zero() || reserve_out.is_zero() {
            return Err(AmmError::EmptyReserves);
        }

        let amount_in = request.amount_in;
        let amount_out = math::quote_output(amount_in, reserve_in, reserve_out)?;
        if amount_out < request.amount_out_min {
            return Err(AmmError::SlippageExceeded);
        }

        let engine = self.config.engine_address;
        self.ledger
            .transfer_from(&token_in, &engine, caller, &engine, amount_in)?;
        self.ledger
            .transfer(&token_out, &engine, &request.to, amount_out)?;
        self.reserves.credit(&hop, amount_in)?;
        self.reserves.debit(&hop.reversed(), amount_out)?;

        info!(
            sender = %caller,
            to = %request.to,
            %token_in,
            %token_out,
            %amount_in,
            %amount_out,
            "swap executed"
        );
        self.events.push(PoolEvent::SwapExecuted {
            sender: *caller,
            to: request.to,
            token_in,
            token_out,
            amount_in,
            amount_out,
        });
        Ok(SwapOutcome {
            amount_in,
            amount_out,
        })
    }
}

/// Amounts accepted when seeding an empty pair.
fn seed_amounts(request: &AddLiquidity) -> Result<(Amount, Amount)> {
    if request.amount_a_desired < request.amount_a_min {
        return Err(AmmError::AmountTooLow("amountADesired too low"));
    }
    if request.amount_b_desired < request.amount_b_min {
        return Err(AmmError::AmountTooLow("amountBDesired too low"));
    }
    Ok((request.amount_a_desired, request.amount_b_desired))
}

/// Largest deposit at the current reserve ratio within the desired caps.
fn fitted_amounts(
    request: &AddLiquidity,
    reserve_a: Amount,
    reserve_b: Amount,
) -> Result<(Amount, Amount)> {
    let b_optimal = proportional(request.amount_a_desired, reserve_a, reserve_b)?;
    let (amount_a, amount_b) = if b_optimal <= request.amount_b_desired {
        (request.amount_a_desired, b_optimal)
    } else {
        let a_optimal = proportional(request.amount_b_desired, reserve_b, reserve_a)?;
        if a_optimal > request.amount_a_desired {
            return Err(AmmError::ConstraintViolation);
        }
        (a_optimal, request.amount_b_desired)
    };
    if amount_a < request.amount_a_min || amount_b < request.amount_b_min {
        return Err(AmmError::ConstraintViolation);
    }
    Ok((amount_a, amount_b))
}
