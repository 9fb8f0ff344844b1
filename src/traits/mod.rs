//! Collaborator abstractions the engine is generic over.
//!
//! The engine depends on two external capabilities: an [`AssetLedger`] that
//! holds and moves pool assets, and a [`Clock`] that provides the current
//! time for deadline checks. Both are traits so that tests and embedders can
//! supply their own.

mod asset_ledger;
mod clock;

pub use asset_ledger::AssetLedger;
pub use clock::Clock;
