//! Rounding policy applied to the selected shard factor.
//!
//! Rounding is always upward: a factor rounded down could fall below the
//! occupancy the confidence level requires.

use serde::{Deserialize, Serialize};

/// How the depth evaluator rounds the order statistic it selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RoundingPolicy {
    /// Raw `max_occupancy / depth`.
    Exact,
    /// Ceiling to the next whole percent, e.g. `0.161 -> 0.17`.
    #[default]
    WholePercent,
}

impl RoundingPolicy {
    /// Convert a selected max occupancy at `depth` into a shard factor.
    ///
    /// `depth` must be at least 1.
    pub fn apply(self, max_occupancy: u64, depth: u64) -> f64 {
        debug_assert!(depth > 0);
        match self {
            Self::Exact => max_occupancy as f64 / depth as f64,
            Self::WholePercent => ceil_percent(max_occupancy, depth) as f64 / 100.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::WholePercent => "whole_percent",
        }
    }
}

impl std::str::FromStr for RoundingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exact" => Ok(Self::Exact),
            "whole_percent" => Ok(Self::WholePercent),
            other => Err(format!("unknown rounding policy '{other}'")),
        }
    }
}

/// `ceil(100 * numerator / denominator)` in integer arithmetic.
///
/// Float multiplication turns `3/10` into `30.000000000000004`, which a
/// float ceiling would push to 31.
pub fn ceil_percent(numerator: u64, denominator: u64) -> u64 {
    let scaled = u128::from(numerator) * 100;
    let denominator = u128::from(denominator.max(1));
    scaled.div_ceil(denominator) as u64
}
