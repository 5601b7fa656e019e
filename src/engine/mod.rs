//! Runtime layer: the driver task and host-facing handle.
//!
//! Everything under [`crate::app`] is synchronous and pure; this module is
//! where the asynchrony lives. [`SearchBox`] spawns a driver task that owns
//! the state, runs debounce timers and provider fetches, and publishes
//! [`crate::app::EngineState`] snapshots through a watch channel.

pub mod driver;

pub use driver::SearchBox;
