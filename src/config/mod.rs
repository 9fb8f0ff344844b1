//! Engine configuration.
//!
//! [`EngineConfig`] is a plain serde structure with defaults for every field.
//! It is loaded from TOML with [`EngineConfig::from_toml_str`] or
//! [`EngineConfig::from_path`], both of which validate before returning.

mod engine_config;
mod error;

pub use engine_config::{EngineConfig, ShareTokenConfig, DEFAULT_ENGINE_ADDRESS};
pub use error::ConfigError;
