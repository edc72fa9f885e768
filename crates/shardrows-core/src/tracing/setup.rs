//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Filter for simulation logs: `SHARDROWS_LOG` directives when they parse,
/// `shardrows=info` otherwise.
///
/// Per-depth events are at debug level, so `SHARDROWS_LOG=shardrows_sim=debug`
/// shows one line per evaluated depth.
pub fn resolve_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the global subscriber used while building shard factor tables.
///
/// Idempotent. A host that already installed a subscriber keeps it.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(resolve_filter())
            .try_init();
    });
}
