//! Success notifications emitted by the engine.
//!
//! Each successful mutating operation appends exactly one [`PoolEvent`] to
//! the engine's log. Failed operations append nothing. Events serialize with
//! an externally visible `event` tag so indexers can dispatch on it:
//!
//! ```json
//! {"event":"SwapExecuted","sender":"0x…","to":"0x…","token_in":"0x…", …}
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::{Address, Amount};

/// A structured record of a completed pool operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum PoolEvent {
    /// Assets were deposited and shares minted.
    LiquidityAdded {
        /// Account whose assets were pulled.
        provider: Address,
        /// Receiver of the minted shares.
        to: Address,
        /// First asset of the pair, in request order.
        token_a: Address,
        /// Second asset of the pair, in request order.
        token_b: Address,
        /// Amount of `token_a` deposited.
        amount_a: Amount,
        /// Amount of `token_b` deposited.
        amount_b: Amount,
        /// Shares minted to `to`.
        shares_minted: Amount,
    },

    /// Shares were burned and assets withdrawn.
    LiquidityRemoved {
        /// Account whose shares were burned.
        provider: Address,
        /// Receiver of the withdrawn assets.
        to: Address,
        /// First asset of the pair, in request order.
        token_a: Address,
        /// Second asset of the pair, in request order.
        token_b: Address,
        /// Amount of `token_a` withdrawn.
        amount_a: Amount,
        /// Amount of `token_b` withdrawn.
        amount_b: Amount,
        /// Shares burned from `provider`.
        shares_burned: Amount,
    },

    /// An exact-input swap executed.
    SwapExecuted {
        /// Account whose input asset was pulled.
        sender: Address,
        /// Receiver of the output asset.
        to: Address,
        /// Asset sold.
        token_in: Address,
        /// Asset bought.
        token_out: Address,
        /// Amount sold.
        amount_in: Amount,
        /// Amount bought.
        amount_out: Amount,
    },
}

impl PoolEvent {
    /// Returns the event's name, matching its serialized `event` tag.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::LiquidityAdded { .. } => "LiquidityAdded",
            Self::LiquidityRemoved { .. } => "LiquidityRemoved",
            Self::SwapExecuted { .. } => "SwapExecuted",
        }
    }
}
