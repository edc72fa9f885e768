//! # shardrows-core
//!
//! Foundation crate for the shardrows estimator. Everything the simulation
//! crate shares lives here: the validated simulation input, the result
//! table, error enums, layered TOML configuration, tracing setup, and
//! cooperative cancellation.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;

pub use errors::{ConfigError, ShardRowsError, SimulationError};
pub use types::{DepthResult, RoundingPolicy, ShardFactorTable, SimulationConfig};
