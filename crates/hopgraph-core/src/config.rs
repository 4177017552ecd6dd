//! Configuration for hopgraph
//!
//! Loaded from an explicit TOML file, or from the global location
//! (`~/.config/hopgraph/config.toml`, overridable with `HOPGRAPH_CONFIG_DIR`).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{HopgraphError, Result};
use crate::graph::DuplicateEdgePolicy;

const CONFIG_DIR: &str = "hopgraph";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "HOPGRAPH_CONFIG_DIR";

/// Graph construction settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Handling of repeated edge insertions
    #[serde(default)]
    pub duplicate_edges: DuplicateEdgePolicy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HopgraphConfig {
    #[serde(default)]
    pub graph: GraphConfig,
}

impl HopgraphConfig {
    fn global_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    HopgraphError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| HopgraphError::io_operation("read config", path.display(), e))?;
        let config: HopgraphConfig = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "config_loaded");
        Ok(config)
    }

    /// Load the global configuration, falling back to defaults when absent
    pub fn load_global() -> Result<Self> {
        let path = Self::global_path()?;

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no global config, using defaults");
            return Ok(Self::default());
        }

        Self::load(&path)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                HopgraphError::io_operation("create config directory", parent.display(), e)
            })?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            HopgraphError::Other(format!("failed to serialize config: {}", e))
        })?;

        fs::write(path, content)
            .map_err(|e| HopgraphError::io_operation("write config", path.display(), e))?;

        Ok(())
    }
}
