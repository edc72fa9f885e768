//! The shard factor lookup table.

use serde::{Deserialize, Serialize};

use super::SimulationConfig;

/// One row: the shard factor to use at a depth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepthResult {
    /// start + rows.
    pub depth: u64,
    /// Fraction of `depth` to request from each shard, in `(0, 1]`.
    pub shard_factor: f64,
}

impl DepthResult {
    pub fn new(depth: u64, shard_factor: f64) -> Self {
        Self { depth, shard_factor }
    }

    /// Rows to request from each shard at this depth (`shards.rows`).
    pub fn rows_per_shard(&self) -> u64 {
        // Tolerance absorbs float noise such as 0.3 * 10 = 3.0000000000000004.
        (self.shard_factor * self.depth as f64 - 1e-9).ceil().max(0.0) as u64
    }
}

/// Ordered rows, one per page, by increasing depth.
///
/// Carries the parameters it was built with so a persisted table is
/// self-describing. Shard factors trend downward with depth but are not
/// guaranteed monotonic row by row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShardFactorTable {
    pub shard_count: u32,
    pub rows_per_page: u64,
    pub accuracy: f64,
    pub trial_count: u32,
    pub rows: Vec<DepthResult>,
}

impl ShardFactorTable {
    pub fn new(config: &SimulationConfig, rows: Vec<DepthResult>) -> Self {
        Self {
            shard_count: config.shard_count,
            rows_per_page: config.rows_per_page,
            accuracy: config.accuracy,
            trial_count: config.trial_count,
            rows,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DepthResult> {
        self.rows.iter()
    }

    pub fn first(&self) -> Option<&DepthResult> {
        self.rows.first()
    }

    pub fn last(&self) -> Option<&DepthResult> {
        self.rows.last()
    }

    pub fn depths(&self) -> impl Iterator<Item = u64> + '_ {
        self.rows.iter().map(|r| r.depth)
    }
}

impl<'a> IntoIterator for &'a ShardFactorTable {
    type Item = &'a DepthResult;
    type IntoIter = std::slice::Iter<'a, DepthResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_per_shard_rounds_up() {
        assert_eq!(DepthResult::new(100, 0.2).rows_per_shard(), 20);
        assert_eq!(DepthResult::new(160, 0.2).rows_per_shard(), 32);
        assert_eq!(DepthResult::new(7, 0.5).rows_per_shard(), 4);
    }

    #[test]
    fn table_records_build_parameters() {
        let config = SimulationConfig::new(12, 100, 2, 500, 99.9);
        let table = ShardFactorTable::new(
            &config,
            vec![DepthResult::new(100, 0.2), DepthResult::new(200, 0.16)],
        );
        assert_eq!(table.shard_count, 12);
        assert_eq!(table.accuracy, 99.9);
        assert_eq!(table.depths().collect::<Vec<_>>(), vec![100, 200]);
        assert_eq!(table.last().map(|r| r.shard_factor), Some(0.16));
    }
}
