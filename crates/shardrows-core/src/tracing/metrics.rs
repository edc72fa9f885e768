//! Structured field names for simulation spans and events.
//!
//! The evaluator and the sweep emit these fields, so log queries can rely on
//! one spelling per measurement.

/// Query depth (start + rows) being evaluated.
pub const DEPTH: &str = "depth";

/// Order statistic of the per-trial maximum shard occupancy.
pub const MAX_OCCUPANCY: &str = "max_occupancy";

/// Shard factor chosen for a depth, after rounding.
pub const SHARD_FACTOR: &str = "shard_factor";

/// Wall time of a depth evaluation or table build in milliseconds.
pub const ELAPSED_MS: &str = "elapsed_ms";

/// Number of rows in a finished table.
pub const ROWS: &str = "rows";

/// Shard count of the build.
pub const SHARD_COUNT: &str = "shard_count";

/// Page count of the build.
pub const PAGES: &str = "pages";

/// Trials per depth.
pub const TRIALS: &str = "trials";

/// Confidence percentage of the build.
pub const ACCURACY: &str = "accuracy";

/// Master seed a random run can be replayed with.
pub const MASTER_SEED: &str = "master_seed";

/// Every field name above, for exporters that pre-register columns.
pub const ALL_FIELDS: &[&str] = &[
    DEPTH,
    MAX_OCCUPANCY,
    SHARD_FACTOR,
    ELAPSED_MS,
    ROWS,
    SHARD_COUNT,
    PAGES,
    TRIALS,
    ACCURACY,
    MASTER_SEED,
];
