//! Engine-wide configuration.

use std::path::Path;

use alloy_primitives::address;
use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::domain::{Address, Decimals};
use crate::error::AmmError;

/// Holder address the engine uses by default for pool assets.
pub const DEFAULT_ENGINE_ADDRESS: Address = address!("5fbdb2315678afecb367f032d93f642f64180aa3");

/// Metadata of the liquidity-share token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShareTokenConfig {
    /// Human-readable token name.
    pub name: String,
    /// Ticker symbol.
    pub symbol: String,
    /// Decimal places of one whole share.
    pub decimals: Decimals,
}

impl Default for ShareTokenConfig {
    fn default() -> Self {
        Self {
            name: "Liquidity Token".to_owned(),
            symbol: "LTK".to_owned(),
            decimals: Decimals::MAX,
        }
    }
}

/// Configuration for a [`SwapEngine`](crate::pool::SwapEngine).
///
/// Every field has a default, so a config file only needs the values it
/// changes:
///
/// ```toml
/// engine_address = "0x5fbdb2315678afecb367f032d93f642f64180aa3"
/// price_decimals = 18
///
/// [share_token]
/// name = "Liquidity Token"
/// symbol = "LTK"
/// decimals = 18
/// ```
///
/// # Validation
///
/// - `engine_address` must not be the zero address.
/// - `share_token.name` and `share_token.symbol` must not be blank.
/// - Decimal fields are range-checked at deserialization by [`Decimals`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Address under which the engine holds pool assets on the ledger.
    ///
    /// Callers must approve this address before depositing or swapping.
    pub engine_address: Address,
    /// Precision of spot prices: `SCALE = 10^price_decimals`.
    pub price_decimals: Decimals,
    /// Liquidity-share token metadata.
    pub share_token: ShareTokenConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            engine_address: DEFAULT_ENGINE_ADDRESS,
            price_decimals: Decimals::MAX,
            share_token: ShareTokenConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Returns the default config with a different engine holder address.
    #[must_use]
    pub fn with_engine_address(mut self, engine_address: Address) -> Self {
        self.engine_address = engine_address;
        self
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] naming the first offending
    /// field.
    pub fn validate(&self) -> Result<(), AmmError> {
        if self.engine_address.is_zero() {
            return Err(AmmError::InvalidConfiguration(
                "engine_address must not be zero",
            ));
        }
        if self.share_token.name.trim().is_empty() {
            return Err(AmmError::InvalidConfiguration(
                "share_token.name must not be empty",
            ));
        }
        if self.share_token.symbol.trim().is_empty() {
            return Err(AmmError::InvalidConfiguration(
                "share_token.symbol must not be empty",
            ));
        }
        Ok(())
    }

    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::Parse`] if the text is not valid for this schema.
    /// - [`ConfigError::Invalid`] if validation fails.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::Io`] if the file cannot be read.
    /// - [`ConfigError::Parse`] or [`ConfigError::Invalid`] as for
    ///   [`from_toml_str`](Self::from_toml_str).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
