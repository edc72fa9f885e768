//! Core data types shared across the workspace.

pub mod rounding;
pub mod simulation;
pub mod table;

pub use rounding::{ceil_percent, RoundingPolicy};
pub use simulation::SimulationConfig;
pub use table::{DepthResult, ShardFactorTable};
