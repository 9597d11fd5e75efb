//! Configuration file I/O operations

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::Config;
use crate::atomic::write_atomic;

/// Comment block written above the settings table
const CONFIG_HEADER: &str = r#"# Legal Eagle Configuration
# =========================
#
# Available options:
#   storage            - Where stats and bookmarks live: "file" (default), "sqlite" or "memory"
#   data_dir           - Directory for stored data (default: ~/.legal-eagle/)
#   default_difficulty - "Beginner", "Intermediate" (default) or "Expert"
#   question_count     - Questions per quiz when `play --count` is not given (default: 5)

"#;

impl Config {
    /// Get the global config directory path (~/.legal-eagle/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".legal-eagle")
    }

    /// Get the global config file path (~/.legal-eagle/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load from `path` (or the global path), returning defaults if the file is absent
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::global_config_path);

        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        Self::from_file(&path)
    }

    /// Write the config to `path`, replacing any existing file atomically
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let body = toml::to_string_pretty(self).context("Failed to serialize config")?;
        write_atomic(path, &format!("{CONFIG_HEADER}{body}"))
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }
}
