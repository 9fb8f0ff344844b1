//! Configuration loading failures.

use thiserror::Error;

use crate::error::AmmError;

/// Errors raised while loading an [`EngineConfig`](super::EngineConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// The config text is not valid TOML for this schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config parsed but a value is out of range.
    #[error(transparent)]
    Invalid(#[from] AmmError),
}
