//! Convenience re-exports for common types and traits.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use pairswap::prelude::*;
//! ```

pub use crate::clock::{ManualClock, SystemClock};
pub use crate::config::{ConfigError, EngineConfig, ShareTokenConfig};
pub use crate::domain::{
    AddLiquidity, Address, Amount, AssetPair, BasisPoints, Decimals, Deposit, Price,
    RemoveLiquidity, SwapExactIn, SwapOutcome, Timestamp, Withdrawal,
};
pub use crate::error::{AmmError, Result};
pub use crate::events::PoolEvent;
pub use crate::ledger::{InMemoryLedger, LedgerError, TokenLedger};
pub use crate::math::{min_output_with_tolerance, CheckedArithmetic};
pub use crate::pool::{SharedEngine, SwapEngine};
pub use crate::traits::{AssetLedger, Clock};
