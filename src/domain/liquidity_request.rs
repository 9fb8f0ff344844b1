//! Deposit and withdrawal requests and their receipts.

use serde::{Deserialize, Serialize};

use super::{Address, Amount, AssetPair, Timestamp};
use crate::error::AmmError;

/// Parameters of an `add_liquidity` call.
///
/// Requests are plain data: nothing is validated at construction because
/// the engine checks the deadline before any other precondition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AddLiquidity {
    /// First asset of the pair.
    pub token_a: Address,
    /// Second asset of the pair.
    pub token_b: Address,
    /// Upper bound on the amount of `token_a` to deposit.
    pub amount_a_desired: Amount,
    /// Upper bound on the amount of `token_b` to deposit.
    pub amount_b_desired: Amount,
    /// Lower bound on the amount of `token_a` actually deposited.
    pub amount_a_min: Amount,
    /// Lower bound on the amount of `token_b` actually deposited.
    pub amount_b_min: Amount,
    /// Receiver of the minted shares.
    pub to: Address,
    /// Last moment at which the deposit may execute.
    pub deadline: Timestamp,
}

impl AddLiquidity {
    /// Builds a request whose minimums equal the desired amounts, the shape
    /// used to seed an empty pool at an exact ratio.
    #[must_use]
    pub const fn exact(
        token_a: Address,
        token_b: Address,
        amount_a: Amount,
        amount_b: Amount,
        to: Address,
        deadline: Timestamp,
    ) -> Self {
        Self {
            token_a,
            token_b,
            amount_a_desired: amount_a,
            amount_b_desired: amount_b,
            amount_a_min: amount_a,
            amount_b_min: amount_b,
            to,
            deadline,
        }
    }

    /// Returns the ordered pair `(token_a, token_b)`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::IdenticalAssets`] if both tokens are equal.
    pub fn pair(&self) -> Result<AssetPair, AmmError> {
        AssetPair::new(self.token_a, self.token_b)
    }
}

/// Parameters of a `remove_liquidity` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RemoveLiquidity {
    /// First asset of the pair.
    pub token_a: Address,
    /// Second asset of the pair.
    pub token_b: Address,
    /// Shares to burn from the caller.
    pub shares: Amount,
    /// Lower bound on the amount of `token_a` returned.
    pub amount_a_min: Amount,
    /// Lower bound on the amount of `token_b` returned.
    pub amount_b_min: Amount,
    /// Receiver of the withdrawn assets.
    pub to: Address,
    /// Last moment at which the withdrawal may execute.
    pub deadline: Timestamp,
}

impl RemoveLiquidity {
    /// Returns the ordered pair `(token_a, token_b)`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::IdenticalAssets`] if both tokens are equal.
    pub fn pair(&self) -> Result<AssetPair, AmmError> {
        AssetPair::new(self.token_a, self.token_b)
    }
}

/// Amounts accepted by a successful deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Deposit {
    /// Amount of `token_a` pulled from the caller.
    pub amount_a: Amount,
    /// Amount of `token_b` pulled from the caller.
    pub amount_b: Amount,
    /// Shares minted to the recipient.
    pub shares: Amount,
}

/// Amounts returned by a successful withdrawal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Withdrawal {
    /// Amount of `token_a` pushed to the recipient.
    pub amount_a: Amount,
    /// Amount of `token_b` pushed to the recipient.
    pub amount_b: Amount,
}
