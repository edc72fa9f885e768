//! Stable error codes for callers that persist or forward failures.

/// Every error enum implements this to expose a machine-readable code.
pub trait ShardRowsErrorCode {
    /// Returns the error code string (e.g., "INVALID_CONFIGURATION").
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const INVALID_CONFIGURATION: &str = "INVALID_CONFIGURATION";
pub const SIMULATION_FAILURE: &str = "SIMULATION_FAILURE";
pub const CANCELLED: &str = "CANCELLED";
