//! The pool engine.
//!
//! - [`SwapEngine`]: reserves, liquidity shares, swaps and the event log.
//! - [`ReserveBook`]: reserve scalars keyed by ordered asset pair.
//! - [`SharedEngine`]: `Arc<Mutex<_>>` handle for multi-threaded hosts.

mod engine;
mod reserves;
mod shared;

#[cfg(test)]
mod proptest_properties;

pub use engine::SwapEngine;
pub use reserves::ReserveBook;
pub use shared::SharedEngine;
