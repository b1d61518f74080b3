//! Tracing initialization and subscriber setup.
//!
//! This module configures the tracing subscriber that carries the engine's
//! spans and events to the host's stderr.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::Config;

/// Initializes the tracing subscriber with a filtered stderr writer.
///
/// Sets up a subscriber pipeline that:
/// 1. Filters spans and events based on the configured trace level
/// 2. Formats them through `tracing-subscriber`'s fmt layer
/// 3. Writes to stderr, where the host process collects them
///
/// # Trace Level Resolution
///
/// The level is determined by:
/// 1. `config.trace_level` if set (any `EnvFilter` directive string works,
///    e.g. `"debug"` or `"crosskey=trace"`)
/// 2. Default: `"info"`
///
/// Invalid directives are ignored by the filter rather than rejected.
///
/// # Initialization Behavior
///
/// Idempotent: safe to call multiple times, only the first call takes effect.
/// A host that already installed a global subscriber keeps it, and the engine's
/// spans flow into whatever is installed.
///
/// # Example
///
/// ```
/// use crosskey::observability::init_tracing;
/// use crosskey::Config;
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
