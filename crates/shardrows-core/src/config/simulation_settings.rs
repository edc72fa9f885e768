//! Simulation section of the config file.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_ACCURACY, DEFAULT_PAGE_COUNT, DEFAULT_ROWS_PER_PAGE, DEFAULT_SHARD_COUNT,
    DEFAULT_TRIAL_COUNT,
};
use crate::types::RoundingPolicy;

/// `[simulation]` table. Every key is optional so layers can be merged;
/// `effective_*` accessors fill in compiled defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SimulationSettings {
    /// Trials per depth. Default: 10000.
    pub trial_count: Option<u32>,
    /// Pages to tabulate. Default: 10.
    pub page_count: Option<u32>,
    /// Rows per page. Default: 100.
    pub rows_per_page: Option<u64>,
    /// Shards in the cluster. Default: 4.
    pub shard_count: Option<u32>,
    /// Confidence percentage. Default: 99.0.
    pub accuracy: Option<f64>,
    /// Master seed for reproducible tables.
    pub seed: Option<u64>,
    /// Default: whole_percent.
    pub rounding: Option<RoundingPolicy>,
    /// Worker threads, 0 = automatic.
    pub threads: Option<usize>,
}

impl SimulationSettings {
    pub fn effective_trial_count(&self) -> u32 {
        self.trial_count.unwrap_or(DEFAULT_TRIAL_COUNT)
    }

    pub fn effective_page_count(&self) -> u32 {
        self.page_count.unwrap_or(DEFAULT_PAGE_COUNT)
    }

    pub fn effective_rows_per_page(&self) -> u64 {
        self.rows_per_page.unwrap_or(DEFAULT_ROWS_PER_PAGE)
    }

    pub fn effective_shard_count(&self) -> u32 {
        self.shard_count.unwrap_or(DEFAULT_SHARD_COUNT)
    }

    pub fn effective_accuracy(&self) -> f64 {
        self.accuracy.unwrap_or(DEFAULT_ACCURACY)
    }

    pub fn effective_rounding(&self) -> RoundingPolicy {
        self.rounding.unwrap_or_default()
    }
}
