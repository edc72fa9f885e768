//! Top-level configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{OutputSettings, SimulationSettings};
use crate::constants::{PROJECT_CONFIG_FILE, USER_CONFIG_DIR};
use crate::errors::{ConfigError, SimulationError};
use crate::types::{RoundingPolicy, SimulationConfig};

/// Top-level configuration.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`SHARDROWS_*`)
/// 3. Project config (`shardrows.toml` in project root)
/// 4. User config (`~/.shardrows/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ShardRowsConfig {
    pub simulation: SimulationSettings,
    pub output: OutputSettings,
}

/// Values supplied by an invoking command line.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub trial_count: Option<u32>,
    pub page_count: Option<u32>,
    pub rows_per_page: Option<u64>,
    pub shard_count: Option<u32>,
    pub accuracy: Option<f64>,
    pub seed: Option<u64>,
    pub format: Option<String>,
}

impl ShardRowsConfig {
    /// Load configuration with layered resolution, then validate it.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        ::tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the explicitly set values.
    pub fn validate(config: &ShardRowsConfig) -> Result<(), ConfigError> {
        let sim = &config.simulation;
        let positive = [
            ("simulation.trial_count", sim.trial_count.map(u64::from)),
            ("simulation.page_count", sim.page_count.map(u64::from)),
            ("simulation.rows_per_page", sim.rows_per_page),
            ("simulation.shard_count", sim.shard_count.map(u64::from)),
        ];
        for (field, value) in positive {
            if value == Some(0) {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if let Some(accuracy) = sim.accuracy {
            if !accuracy.is_finite() || accuracy <= 0.0 || accuracy > 100.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "simulation.accuracy".to_string(),
                    message: "must be greater than 0 and at most 100".to_string(),
                });
            }
        }
        if let Some(ref format) = config.output.format {
            if format.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "output.format".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Resolve the validated simulation input.
    pub fn simulation_config(&self) -> Result<SimulationConfig, ConfigError> {
        let sim = &self.simulation;
        let config = SimulationConfig {
            shard_count: sim.effective_shard_count(),
            rows_per_page: sim.effective_rows_per_page(),
            page_count: sim.effective_page_count(),
            trial_count: sim.effective_trial_count(),
            accuracy: sim.effective_accuracy(),
            seed: sim.seed,
            rounding: sim.effective_rounding(),
            threads: sim.threads,
        };
        config.validate().map_err(|e| match e {
            SimulationError::InvalidConfiguration { field, message } => {
                ConfigError::ValidationFailed {
                    field: format!("simulation.{field}"),
                    message,
                }
            }
            other => ConfigError::ValidationFailed {
                field: "simulation".to_string(),
                message: other.to_string(),
            },
        })?;
        Ok(config)
    }

    /// Returns the user config path: `~/.shardrows/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(USER_CONFIG_DIR).join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut ShardRowsConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: ShardRowsConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; only `Some` values in `other` win.
    fn merge(base: &mut ShardRowsConfig, other: &ShardRowsConfig) {
        let (b, o) = (&mut base.simulation, &other.simulation);
        if o.trial_count.is_some() {
            b.trial_count = o.trial_count;
        }
        if o.page_count.is_some() {
            b.page_count = o.page_count;
        }
        if o.rows_per_page.is_some() {
            b.rows_per_page = o.rows_per_page;
        }
        if o.shard_count.is_some() {
            b.shard_count = o.shard_count;
        }
        if o.accuracy.is_some() {
            b.accuracy = o.accuracy;
        }
        if o.seed.is_some() {
            b.seed = o.seed;
        }
        if o.rounding.is_some() {
            b.rounding = o.rounding;
        }
        if o.threads.is_some() {
            b.threads = o.threads;
        }

        if other.output.format.is_some() {
            base.output.format = other.output.format.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `SHARDROWS_TRIAL_COUNT`, `SHARDROWS_ACCURACY`, etc.
    fn apply_env_overrides(config: &mut ShardRowsConfig) {
        let sim = &mut config.simulation;
        env_parse("SHARDROWS_TRIAL_COUNT", &mut sim.trial_count);
        env_parse("SHARDROWS_PAGE_COUNT", &mut sim.page_count);
        env_parse("SHARDROWS_ROWS_PER_PAGE", &mut sim.rows_per_page);
        env_parse("SHARDROWS_SHARD_COUNT", &mut sim.shard_count);
        env_parse("SHARDROWS_ACCURACY", &mut sim.accuracy);
        env_parse("SHARDROWS_SEED", &mut sim.seed);
        env_parse::<RoundingPolicy>("SHARDROWS_ROUNDING", &mut sim.rounding);
        env_parse("SHARDROWS_THREADS", &mut sim.threads);
        if let Ok(val) = std::env::var("SHARDROWS_OUTPUT_FORMAT") {
            config.output.format = Some(val);
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut ShardRowsConfig, cli: &CliOverrides) {
        let sim = &mut config.simulation;
        if let Some(v) = cli.trial_count {
            sim.trial_count = Some(v);
        }
        if let Some(v) = cli.page_count {
            sim.page_count = Some(v);
        }
        if let Some(v) = cli.rows_per_page {
            sim.rows_per_page = Some(v);
        }
        if let Some(v) = cli.shard_count {
            sim.shard_count = Some(v);
        }
        if let Some(v) = cli.accuracy {
            sim.accuracy = Some(v);
        }
        if let Some(v) = cli.seed {
            sim.seed = Some(v);
        }
        if let Some(ref v) = cli.format {
            config.output.format = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Overwrite `slot` when `key` is set and parses; unparsable values are
/// logged and ignored.
fn env_parse<T: std::str::FromStr>(key: &str, slot: &mut Option<T>) {
    if let Ok(val) = std::env::var(key) {
        match val.parse::<T>() {
            Ok(v) => *slot = Some(v),
            Err(_) => ::tracing::warn!(key, value = %val, "ignoring unparsable env override"),
        }
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
