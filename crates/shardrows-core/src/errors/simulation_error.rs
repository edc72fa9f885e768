//! Simulation errors.

use super::error_code::{self, ShardRowsErrorCode};

/// Errors raised by the trial simulator, depth evaluator and sweep.
///
/// Any of these aborts the whole table build; there is no partial table.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    #[error("Invalid configuration for {field}: {message}")]
    InvalidConfiguration { field: String, message: String },

    #[error("Simulation failed: {0}")]
    SimulationFailure(String),

    #[error("Simulation cancelled")]
    Cancelled,
}

impl SimulationError {
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the violated field, for configuration errors.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidConfiguration { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl ShardRowsErrorCode for SimulationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidConfiguration { .. } => error_code::INVALID_CONFIGURATION,
            Self::SimulationFailure(_) => error_code::SIMULATION_FAILURE,
            Self::Cancelled => error_code::CANCELLED,
        }
    }
}
