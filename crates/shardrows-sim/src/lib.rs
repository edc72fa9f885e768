//! # shardrows-sim
//!
//! Monte Carlo estimation of the shard factor: the fraction of `start + rows`
//! a query coordinator must request from each shard so that a paginated,
//! merged result is complete with a target confidence.
//!
//! Pipeline: [`sweep`] walks pages and calls [`evaluator`] once per depth,
//! which repeats [`trial`] `trial_count` times and extracts an order
//! statistic from the resulting [`sample`]. [`reporters`] render the table,
//! and [`bound`] gives a sampling-free upper estimate for cross-checks.

pub mod bound;
pub mod evaluator;
pub mod reporters;
pub mod rng;
pub mod sample;
pub mod sweep;
pub mod trial;

pub use evaluator::{evaluate_depth, DepthEvaluator, FixedTrials, RandomTrials, TrialSource};
pub use sample::{order_statistic_rank, select_quantile, DepthSample};
pub use sweep::{build_table, SweepController};
pub use trial::{run_trial, TrialSimulator};
