//! Validated simulation input.

use serde::{Deserialize, Serialize};

use super::RoundingPolicy;
use crate::constants::{
    DEFAULT_ACCURACY, DEFAULT_PAGE_COUNT, DEFAULT_ROWS_PER_PAGE, DEFAULT_SHARD_COUNT,
    DEFAULT_TRIAL_COUNT,
};
use crate::errors::SimulationError;

/// Parameters for one table build.
///
/// Constructed directly or resolved from layered configuration via
/// [`crate::config::ShardRowsConfig::simulation_config`]. Every entry point
/// of the simulation calls [`SimulationConfig::validate`] before sampling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of shards documents are scattered across.
    pub shard_count: u32,
    /// Rows per result page; depth of page `p` is `p * rows_per_page`.
    pub rows_per_page: u64,
    /// Number of pages to tabulate.
    pub page_count: u32,
    /// Monte Carlo repetitions per depth.
    pub trial_count: u32,
    /// Confidence percentage in `(0, 100]`.
    pub accuracy: f64,
    /// Master seed. `None` draws one from OS entropy per build.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub rounding: RoundingPolicy,
    /// Worker threads. `None` or `Some(0)` uses the global rayon pool.
    #[serde(default)]
    pub threads: Option<usize>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            shard_count: DEFAULT_SHARD_COUNT,
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            page_count: DEFAULT_PAGE_COUNT,
            trial_count: DEFAULT_TRIAL_COUNT,
            accuracy: DEFAULT_ACCURACY,
            seed: None,
            rounding: RoundingPolicy::default(),
            threads: None,
        }
    }
}

impl SimulationConfig {
    pub fn new(
        shard_count: u32,
        rows_per_page: u64,
        page_count: u32,
        trial_count: u32,
        accuracy: f64,
    ) -> Self {
        Self {
            shard_count,
            rows_per_page,
            page_count,
            trial_count,
            accuracy,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_rounding(mut self, rounding: RoundingPolicy) -> Self {
        self.rounding = rounding;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Check every input constraint. The first violation is reported with
    /// the offending field name.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.shard_count == 0 {
            return Err(SimulationError::invalid("shard_count", "must be at least 1"));
        }
        if self.rows_per_page == 0 {
            return Err(SimulationError::invalid("rows_per_page", "must be at least 1"));
        }
        if self.page_count == 0 {
            return Err(SimulationError::invalid("page_count", "must be at least 1"));
        }
        Self::validate_sampling(self.trial_count, self.accuracy)?;
        if self.max_depth().is_none() {
            return Err(SimulationError::invalid(
                "rows_per_page",
                format!(
                    "page_count * rows_per_page overflows ({} * {})",
                    self.page_count, self.rows_per_page
                ),
            ));
        }
        Ok(())
    }

    /// Constraints the depth evaluator needs on its own.
    pub fn validate_sampling(trial_count: u32, accuracy: f64) -> Result<(), SimulationError> {
        if trial_count == 0 {
            return Err(SimulationError::invalid("trial_count", "must be at least 1"));
        }
        if !accuracy.is_finite() || accuracy <= 0.0 || accuracy > 100.0 {
            return Err(SimulationError::invalid(
                "accuracy",
                format!("must be in (0, 100], got {accuracy}"),
            ));
        }
        Ok(())
    }

    /// Depth of a 1-based page, or `None` on overflow.
    pub fn depth_for_page(&self, page: u32) -> Option<u64> {
        u64::from(page).checked_mul(self.rows_per_page)
    }

    /// Depth of the last page, or `None` on overflow.
    pub fn max_depth(&self) -> Option<u64> {
        self.depth_for_page(self.page_count)
    }

    /// Worker count to pin a dedicated pool to, if any.
    pub fn effective_threads(&self) -> Option<usize> {
        self.threads.filter(|&n| n > 0)
    }
}
