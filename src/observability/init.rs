//! Tracing initialization and subscriber setup.
//!
//! This module configures the tracing subscriber the engine logs through,
//! filtering by the configured level and formatting to standard error.

use crate::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber for engine logging.
///
/// Sets up a tracing subscriber pipeline that:
/// 1. Filters spans and events based on the configured trace level
/// 2. Formats them to standard error
///
/// # Parameters
///
/// * `config` - Engine configuration containing the `trace_level` option
///
/// # Trace Level Resolution
///
/// Level is determined by:
/// 1. `config.trace_level` if set
/// 2. Default: `"info"`
///
/// The value is an `EnvFilter` directive, so per-module levels like
/// `"searchbox::app=trace"` work as well as plain levels.
///
/// # Initialization Behavior
///
/// Idempotent: safe to call multiple times, and safe when the host already
/// installed its own subscriber (only the first global subscriber takes
/// effect).
///
/// # Example
///
/// ```rust
/// use searchbox::observability::init_tracing;
/// use searchbox::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    let _ = subscriber.try_init();
}
