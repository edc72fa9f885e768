//! Configuration system for shardrows.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod output_settings;
pub mod shardrows_config;
pub mod simulation_settings;

pub use output_settings::OutputSettings;
pub use shardrows_config::{CliOverrides, ShardRowsConfig};
pub use simulation_settings::SimulationSettings;
