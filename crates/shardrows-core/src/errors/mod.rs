//! Error handling for shardrows.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod simulation_error;

pub use config_error::ConfigError;
pub use error_code::ShardRowsErrorCode;
pub use simulation_error::SimulationError;

/// Top-level error for a full run: configuration resolution followed by a
/// table build. Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum ShardRowsError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Simulation error: {0}")]
    Simulation(#[from] SimulationError),
}

impl ShardRowsErrorCode for ShardRowsError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Simulation(e) => e.error_code(),
        }
    }
}
