//! Tests for error codes and conversions.

use shardrows_core::errors::error_code;
use shardrows_core::errors::*;

#[test]
fn test_simulation_error_codes() {
    let invalid = SimulationError::invalid("accuracy", "must be in (0, 100]");
    assert_eq!(invalid.error_code(), error_code::INVALID_CONFIGURATION);
    assert_eq!(invalid.field(), Some("accuracy"));

    let failure = SimulationError::SimulationFailure("entropy unavailable".into());
    assert_eq!(failure.error_code(), error_code::SIMULATION_FAILURE);
    assert_eq!(failure.field(), None);

    assert_eq!(SimulationError::Cancelled.error_code(), error_code::CANCELLED);
}

#[test]
fn test_from_conversions_keep_codes() {
    let config = ConfigError::FileNotFound {
        path: "/tmp/shardrows.toml".into(),
    };
    let top: ShardRowsError = config.into();
    assert!(matches!(top, ShardRowsError::Config(_)));
    assert_eq!(top.error_code(), error_code::CONFIG_ERROR);

    let top: ShardRowsError = SimulationError::Cancelled.into();
    assert!(matches!(top, ShardRowsError::Simulation(SimulationError::Cancelled)));
    assert_eq!(top.error_code(), error_code::CANCELLED);
}

#[test]
fn test_coded_string_names_the_constraint() {
    let err = SimulationError::invalid("rows_per_page", "must be at least 1");
    assert_eq!(
        err.coded_string(),
        "[INVALID_CONFIGURATION] Invalid configuration for rows_per_page: must be at least 1"
    );
}
