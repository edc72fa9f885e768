//! Output configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_OUTPUT_FORMAT;

/// How a built table is rendered.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputSettings {
    /// Reporter name (`console`, `json`). Default: `console`.
    pub format: Option<String>,
}

impl OutputSettings {
    pub fn effective_format(&self) -> &str {
        self.format.as_deref().unwrap_or(DEFAULT_OUTPUT_FORMAT)
    }
}
