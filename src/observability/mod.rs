//! Structured logging for engine internals.
//!
//! This module wires up the `tracing` subscriber the engine logs through.
//! Every event the handler processes, every action the driver executes, and
//! every provider failure is instrumented with spans and fields, so a host
//! that wants to see why the panel did or did not open can turn the level up
//! without touching engine code.
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `trace_level` config option in engine configuration
//! 2. Default: `"info"`
//!
//! # Usage
//!
//! Initialize tracing once, before spawning the engine:
//!
//! ```rust
//! use searchbox::observability::init_tracing;
//! use searchbox::Config;
//!
//! let config = Config::default();
//! init_tracing(&config);
//!
//! tracing::debug!("engine initialized");
//! ```
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup

mod init;

pub use init::init_tracing;
