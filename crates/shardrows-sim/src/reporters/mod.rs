//! Reporters: output formats for a shard factor table.

pub mod console;
pub mod json;

use shardrows_core::types::ShardFactorTable;

/// Trait for table rendering.
pub trait Reporter: Send + Sync {
    fn name(&self) -> &'static str;
    fn generate(&self, table: &ShardFactorTable) -> Result<String, String>;
}

/// Create a reporter by format name.
pub fn create_reporter(format: &str) -> Option<Box<dyn Reporter>> {
    match format {
        "console" => Some(Box::new(console::ConsoleReporter)),
        "json" => Some(Box::new(json::JsonReporter)),
        _ => None,
    }
}

/// List all available reporter format names.
pub fn available_formats() -> &'static [&'static str] {
    &["console", "json"]
}

/// Shard factor as a whole percentage, rounded up.
///
/// The tolerance keeps float noise (`0.29 * 100 = 28.999999999999996`,
/// `0.07 * 100 = 7.000000000000001`) from moving the result.
pub fn factor_percent(shard_factor: f64) -> u64 {
    (shard_factor * 100.0 - 1e-9).ceil().max(0.0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_knows_every_listed_format() {
        for format in available_formats() {
            let reporter = create_reporter(format).unwrap();
            assert_eq!(reporter.name(), *format);
        }
        assert!(create_reporter("sarif").is_none());
    }

    #[test]
    fn percent_is_stable_under_float_noise() {
        assert_eq!(factor_percent(0.29), 29);
        assert_eq!(factor_percent(0.07), 7);
        assert_eq!(factor_percent(0.2), 20);
        assert_eq!(factor_percent(1.0), 100);
        assert_eq!(factor_percent(0.161), 17);
    }
}
