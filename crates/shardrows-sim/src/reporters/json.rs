//! JSON reporter: structured JSON output for persisting the table.

use serde_json::json;
use shardrows_core::types::ShardFactorTable;

use super::{factor_percent, Reporter};

/// JSON reporter for machine-readable output.
#[derive(Debug, Default)]
pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, table: &ShardFactorTable) -> Result<String, String> {
        let rows: Vec<serde_json::Value> = table
            .iter()
            .map(|r| {
                json!({
                    "depth": r.depth,
                    "shard_factor": r.shard_factor,
                    "percent": factor_percent(r.shard_factor),
                    "rows_per_shard": r.rows_per_shard(),
                })
            })
            .collect();

        let output = json!({
            "shard_count": table.shard_count,
            "rows_per_page": table.rows_per_page,
            "accuracy": table.accuracy,
            "trial_count": table.trial_count,
            "row_count": table.len(),
            "rows": rows,
        });

        serde_json::to_string_pretty(&output).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shardrows_core::types::{DepthResult, SimulationConfig};

    #[test]
    fn json_carries_metadata_and_rows() {
        let config = SimulationConfig::new(4, 100, 2, 10_000, 99.0);
        let table = ShardFactorTable::new(
            &config,
            vec![DepthResult::new(100, 0.35), DepthResult::new(200, 0.31)],
        );
        let text = JsonReporter.generate(&table).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["shard_count"], 4);
        assert_eq!(value["accuracy"], 99.0);
        assert_eq!(value["row_count"], 2);
        assert_eq!(value["rows"][0]["depth"], 100);
        assert_eq!(value["rows"][0]["percent"], 35);
        assert_eq!(value["rows"][0]["rows_per_shard"], 35);
        assert_eq!(value["rows"][1]["shard_factor"], 0.31);
    }
}
