//! Exact-input swap request and its outcome.

use serde::{Deserialize, Serialize};

use super::{Address, Amount, AssetPair, Timestamp};
use crate::error::AmmError;

/// Parameters of a `swap_exact_tokens_for_tokens` call.
///
/// `path` lists the assets traversed; only single-hop paths of exactly two
/// distinct assets are executable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SwapExactIn {
    /// Exact amount of `path[0]` to sell.
    pub amount_in: Amount,
    /// Minimum acceptable amount of `path[1]` to receive.
    pub amount_out_min: Amount,
    /// Assets traversed, input first.
    pub path: Vec<Address>,
    /// Receiver of the output asset.
    pub to: Address,
    /// Last moment at which the swap may execute.
    pub deadline: Timestamp,
}

impl SwapExactIn {
    /// Builds a single-hop request selling `token_in` for `token_out`.
    #[must_use]
    pub fn single_hop(
        amount_in: Amount,
        amount_out_min: Amount,
        token_in: Address,
        token_out: Address,
        to: Address,
        deadline: Timestamp,
    ) -> Self {
        Self {
            amount_in,
            amount_out_min,
            path: vec![token_in, token_out],
            to,
            deadline,
        }
    }

    /// Resolves `path` into the `(input, output)` pair.
    ///
    /// # Errors
    ///
    /// - [`AmmError::UnsupportedPath`] unless the path has exactly two entries.
    /// - [`AmmError::IdenticalAssets`] if both entries are the same asset.
    pub fn hop(&self) -> Result<AssetPair, AmmError> {
        let [token_in, token_out] = self.path.as_slice() else {
            return Err(AmmError::UnsupportedPath);
        };
        AssetPair::new(*token_in, *token_out)
    }
}

/// Realized amounts of an executed swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SwapOutcome {
    /// Amount of the input asset pulled from the caller.
    pub amount_in: Amount,
    /// Amount of the output asset pushed to the recipient.
    pub amount_out: Amount,
}

impl SwapOutcome {
    /// Returns the amounts as a `[amount_in, amount_out]` array.
    #[must_use]
    pub const fn amounts(&self) -> [Amount; 2] {
        [self.amount_in, self.amount_out]
    }
}
