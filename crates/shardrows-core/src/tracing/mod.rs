//! Observability for shardrows.
//! `tracing` crate with `EnvFilter`, filter read from `SHARDROWS_LOG`.

pub mod metrics;
pub mod setup;

pub use setup::{init_tracing, resolve_filter};
