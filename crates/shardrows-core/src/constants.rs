//! Shared constants for the shardrows estimator.

/// shardrows version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default Monte Carlo repetitions per depth.
pub const DEFAULT_TRIAL_COUNT: u32 = 10_000;

/// Default number of pages to tabulate.
pub const DEFAULT_PAGE_COUNT: u32 = 10;

/// Default page size in rows.
pub const DEFAULT_ROWS_PER_PAGE: u64 = 100;

/// Default number of shards in the cluster.
pub const DEFAULT_SHARD_COUNT: u32 = 4;

/// Default confidence percentage.
pub const DEFAULT_ACCURACY: f64 = 99.0;

/// Trials simulated per random stream. Fixed so that seeded output does not
/// depend on the worker count.
pub const TRIAL_CHUNK_SIZE: u32 = 1024;

// ---- Configuration ----

/// Project-level config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "shardrows.toml";

/// User-level config directory name under `$HOME`.
pub const USER_CONFIG_DIR: &str = ".shardrows";

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV_VAR: &str = "SHARDROWS_LOG";

/// Filter used when `SHARDROWS_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "shardrows=info";

/// Reporter used when no output format is configured.
pub const DEFAULT_OUTPUT_FORMAT: &str = "console";
