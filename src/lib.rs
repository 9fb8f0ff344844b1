//! # pairswap
//!
//! Constant-product automated market maker engine: deposit two assets into a
//! pool, receive fungible liquidity shares, and trade one asset for the other
//! against the pool's reserves under slippage and deadline protection.
//!
//! The engine does not hold balances itself. It moves assets through an
//! [`AssetLedger`](traits::AssetLedger) collaborator and reads time from a
//! [`Clock`](traits::Clock). An in-memory ledger and both a wall clock and a
//! manual clock ship with the crate.
//!
//! # Quick Start
//!
//! ```rust
//! use pairswap::prelude::*;
//!
//! let (teth, tkipu) = (Address::repeat_byte(1), Address::repeat_byte(2));
//! let owner = Address::repeat_byte(0xa1);
//! let e18 = |n: u128| Amount::new(n * 1_000_000_000_000_000_000);
//!
//! // 1. Fund the owner and authorize the engine on both assets
//! let config = EngineConfig::default();
//! let mut ledger = InMemoryLedger::new();
//! for token in [teth, tkipu] {
//!     ledger.register(token, "Token", "TKN", Decimals::MAX);
//!     ledger.mint(&token, &owner, e18(1_000)).expect("mint");
//!     ledger.approve(&token, &owner, &config.engine_address, Amount::MAX).expect("approve");
//! }
//!
//! // 2. Seed the pool at 100 TETH : 200 TKIPU
//! let clock = ManualClock::new(Timestamp::new(1_700_000_000));
//! let deadline = clock.now().plus_secs(600);
//! let mut engine = SwapEngine::new(config, ledger, clock).expect("valid config");
//! let seed = AddLiquidity::exact(teth, tkipu, e18(100), e18(200), owner, deadline);
//! engine.add_liquidity(&owner, &seed).expect("seeded");
//!
//! // 3. Price and quote
//! assert_eq!(engine.spot_price(&teth, &tkipu).expect("funded").to_string(), "2");
//! let quote = SwapEngine::<InMemoryLedger, ManualClock>::quote_output(
//!     e18(10),
//!     engine.reserve(&teth, &tkipu),
//!     engine.reserve(&tkipu, &teth),
//! )
//! .expect("fits");
//!
//! // 4. Swap with a 0.1% slippage floor
//! let min_out = min_output_with_tolerance(quote, BasisPoints::new(10)).expect("valid");
//! let swap = SwapExactIn::single_hop(e18(10), min_out, teth, tkipu, owner, deadline);
//! let outcome = engine.swap_exact_tokens_for_tokens(&owner, &swap).expect("swap");
//! assert_eq!(outcome.amount_out, quote);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │    Caller    │  AddLiquidity / RemoveLiquidity / SwapExactIn
//! └──────┬───────┘
//!        │
//!        ▼
//! ┌──────────────┐      ┌──────────────┐
//! │  SwapEngine  │─────▶│ AssetLedger  │  transfer_from / transfer
//! │  (pool)      │      └──────────────┘
//! │              │      ┌──────────────┐
//! │ ReserveBook  │─────▶│    Clock     │  deadline checks
//! │ share ledger │      └──────────────┘
//! │ event log    │
//! └──────┬───────┘
//!        │ math
//!        ▼
//! ┌──────────────┐
//! │   Domain     │  Amount (U256), Price, Timestamp, AssetPair, …
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Amount`](domain::Amount), [`Price`](domain::Price), [`Timestamp`](domain::Timestamp), request and receipt types |
//! | [`math`] | Checked arithmetic, integer square root, constant-product pricing |
//! | [`traits`] | Collaborator seams: [`AssetLedger`](traits::AssetLedger), [`Clock`](traits::Clock) |
//! | [`ledger`] | [`TokenLedger`](ledger::TokenLedger) and [`InMemoryLedger`](ledger::InMemoryLedger) |
//! | [`clock`] | [`SystemClock`](clock::SystemClock) and [`ManualClock`](clock::ManualClock) |
//! | [`config`] | [`EngineConfig`](config::EngineConfig), loaded from TOML |
//! | [`events`] | [`PoolEvent`](events::PoolEvent) success notifications |
//! | [`pool`] | [`SwapEngine`](pool::SwapEngine) and [`SharedEngine`](pool::SharedEngine) |
//! | [`error`] | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |
//!
//! # Logging
//!
//! The engine emits [`tracing`] events: `info` for each completed deposit,
//! withdrawal and swap, `debug` for rejected operations and price queries,
//! and `warn` when a second pair is seeded while shares are outstanding.
//! Install a subscriber in the host binary to see them.

pub mod clock;
pub mod config;
pub mod domain;
pub mod error;
pub mod events;
pub mod ledger;
pub mod math;
pub mod pool;
pub mod prelude;
pub mod traits;
