//! Empirical distribution of one depth and order-statistic extraction.
//!
//! The quantile is the ceiling-indexed order statistic: with `n` trials and
//! confidence `a`, rank `k = ceil(a / 100 * n)` clamped to `[1, n]`, and the
//! answer is the `k`-th smallest value. At least `a%` of trials are then at
//! or below the answer. No interpolation between neighbours.

use shardrows_core::errors::SimulationError;
use shardrows_core::types::SimulationConfig;

/// Significant digits kept from `accuracy * n / 100` before taking the
/// ceiling. Float noise sits around the 16th digit, while a confidence given
/// to ten decimals still shows up in the 12th.
const RANK_SIGNIFICANT_DIGITS: i32 = 12;

/// 1-based rank of the order statistic for `accuracy` over `n` values.
///
/// `n` must be at least 1 and `accuracy` in `(0, 100]`.
pub fn order_statistic_rank(accuracy: f64, n: usize) -> usize {
    debug_assert!(n > 0);
    let raw = round_significant(accuracy * n as f64 / 100.0, RANK_SIGNIFICANT_DIGITS);
    (raw.ceil().max(1.0) as usize).min(n)
}

/// Round to `digits` significant digits; a product like `4.000000000000001`
/// becomes `4.0` while `1.0000000005` stays put.
fn round_significant(x: f64, digits: i32) -> f64 {
    if x == 0.0 || !x.is_finite() {
        return x;
    }
    let magnitude = x.abs().log10().floor() as i32;
    let scale = 10f64.powi(digits - 1 - magnitude);
    (x * scale).round() / scale
}

/// Select the quantile of arbitrary shard factors.
pub fn select_quantile(mut values: Vec<f64>, accuracy: f64) -> Result<f64, SimulationError> {
    let n = u32::try_from(values.len())
        .map_err(|_| SimulationError::invalid("trial_count", "exceeds u32::MAX"))?;
    SimulationConfig::validate_sampling(n, accuracy)?;
    if values.iter().any(|v| v.is_nan()) {
        return Err(SimulationError::SimulationFailure(
            "sample contains NaN".to_string(),
        ));
    }
    values.sort_unstable_by(f64::total_cmp);
    Ok(values[order_statistic_rank(accuracy, values.len()) - 1])
}

/// Max occupancies observed over all trials of one depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthSample {
    depth: u64,
    occupancies: Vec<u64>,
}

impl DepthSample {
    pub fn new(depth: u64, occupancies: Vec<u64>) -> Self {
        Self { depth, occupancies }
    }

    pub fn depth(&self) -> u64 {
        self.depth
    }

    pub fn len(&self) -> usize {
        self.occupancies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occupancies.is_empty()
    }

    pub fn occupancies(&self) -> &[u64] {
        &self.occupancies
    }

    /// `max_occupancy / depth` per trial, in trial order.
    pub fn shard_factors(&self) -> impl Iterator<Item = f64> + '_ {
        let depth = self.depth as f64;
        self.occupancies.iter().map(move |&m| m as f64 / depth)
    }

    /// Sort and return the max occupancy at the confidence rank.
    ///
    /// Occupancies share the denominator `depth`, so ordering them orders
    /// the shard factors too, without float division.
    pub fn order_statistic(mut self, accuracy: f64) -> Result<u64, SimulationError> {
        let n = u32::try_from(self.occupancies.len())
            .map_err(|_| SimulationError::invalid("trial_count", "exceeds u32::MAX"))?;
        SimulationConfig::validate_sampling(n, accuracy)?;
        self.occupancies.sort_unstable();
        let k = order_statistic_rank(accuracy, self.occupancies.len());
        Ok(self.occupancies[k - 1])
    }
}
