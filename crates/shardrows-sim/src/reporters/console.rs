//! Console reporter: tab-separated depth / percentage table.

use shardrows_core::types::ShardFactorTable;

use super::{factor_percent, Reporter};

pub const HEADER: &str = "Depth\tShard factor to use at this depth";

/// Two-column table, one line per depth:
///
/// ```text
/// Depth   Shard factor to use at this depth
/// 100     20%
/// 200     16%
/// ```
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn name(&self) -> &'static str {
        "console"
    }

    fn generate(&self, table: &ShardFactorTable) -> Result<String, String> {
        let mut out = String::with_capacity(HEADER.len() + table.len() * 12);
        out.push_str(HEADER);
        out.push('\n');
        for row in table {
            out.push_str(&format!("{}\t{}%\n", row.depth, factor_percent(row.shard_factor)));
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shardrows_core::types::{DepthResult, SimulationConfig};

    #[test]
    fn renders_header_and_rows() {
        let config = SimulationConfig::new(12, 100, 2, 10_000, 99.9);
        let table = ShardFactorTable::new(
            &config,
            vec![DepthResult::new(100, 0.2), DepthResult::new(200, 0.16)],
        );
        let text = ConsoleReporter.generate(&table).unwrap();
        assert_eq!(
            text,
            "Depth\tShard factor to use at this depth\n100\t20%\n200\t16%\n"
        );
    }

    #[test]
    fn empty_table_is_header_only() {
        let table = ShardFactorTable::new(&SimulationConfig::default(), Vec::new());
        assert_eq!(ConsoleReporter.generate(&table).unwrap(), format!("{HEADER}\n"));
    }
}
