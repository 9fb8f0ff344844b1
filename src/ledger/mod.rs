//! Fungible token ledgers.
//!
//! [`TokenLedger`] is a single token with balances, allowances and a supply;
//! the engine uses one for its liquidity shares. [`InMemoryLedger`] groups
//! several of them behind the [`AssetLedger`](crate::traits::AssetLedger)
//! trait so the engine can move pool assets.

mod error;
mod memory;
mod token;

pub use error::LedgerError;
pub use memory::InMemoryLedger;
pub use token::TokenLedger;
