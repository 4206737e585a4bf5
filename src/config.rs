//! Shell configuration - optional YAML file plus command line overrides

use crate::core::AdmissionRules;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const LOCAL_CONFIG: &str = "tasklist.yml";

/// Settings for one shell session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Print the welcome banner on startup
    pub banner: bool,
    /// Wait for Enter after each menu interaction
    pub pause: bool,
    /// Maximum task description length in characters
    pub max_length: Option<usize>,
    /// Refuse tasks that repeat an existing one, ignoring case
    pub reject_duplicates: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            banner: true,
            pause: true,
            max_length: None,
            reject_duplicates: false,
        }
    }
}

impl ShellConfig {
    /// Load config from YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: ShellConfig = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the first config found, or defaults.
    /// Priority:
    /// 1. ./tasklist.yml
    /// 2. <config dir>/tasklist/config.yml
    pub fn auto_load() -> Result<Self> {
        for path in Self::search_paths() {
            if path.exists() {
                log::info!("Loading config from: {}", path.display());
                return Self::from_file(&path);
            }
        }

        log::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(LOCAL_CONFIG)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("tasklist").join("config.yml"));
        }
        paths
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_length == Some(0) {
            anyhow::bail!("max_length must be at least 1");
        }
        Ok(())
    }

    /// Store admission rules derived from this config
    pub fn rules(&self) -> AdmissionRules {
        AdmissionRules {
            max_length: self.max_length,
            reject_duplicates: self.reject_duplicates,
        }
    }
}
