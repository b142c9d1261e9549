//! Tracing initialization for embedding hosts
//!
//! The engine only emits `tracing` events; wiring a subscriber is up to the
//! process that embeds it. These helpers give hosts (and tests) a one-line
//! setup with the usual `RUST_LOG` filtering.

use tracing_subscriber::EnvFilter;

/// Initialize structured logging. Panics if a global subscriber is already
/// set; use [`try_init`] when that is not certain.
pub fn init(default_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(true)
        .init();
}

/// Initialize structured logging, ignoring an already-installed subscriber.
pub fn try_init(default_level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(true)
        .try_init();
}
