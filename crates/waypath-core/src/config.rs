//! Edge-list loading configuration

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WaypathError};

/// Configuration for edge-list loading
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Cost assigned to edges whose line omits the cost field
    #[serde(default)]
    pub default_cost: u64,

    /// Whether `a,a,cost` lines are accepted
    #[serde(default = "default_allow_self_loops")]
    pub allow_self_loops: bool,
}

fn default_allow_self_loops() -> bool {
    true
}

impl Default for GraphConfig {
    fn default() -> Self {
        GraphConfig {
            default_cost: 0,
            allow_self_loops: true,
        }
    }
}

impl GraphConfig {
    /// Load configuration from an optional TOML file.
    ///
    /// `None` yields the defaults; a path that cannot be read or
    /// parsed is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = fs::read_to_string(path).map_err(|e| {
            WaypathError::Other(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(toml::from_str(&content)?)
    }
}
