//! Configuration management
//!
//! Config is read from `~/.qna/config.toml` (or the file named by
//! `QNA_CONFIG`). A missing file means defaults: the file backend storing
//! its tables in `~/.qna/qna.json`.
//!
//! ```toml
//! [storage]
//! backend = "file"
//! path = "/tmp/qna.json"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::paths;
use crate::storage::Backend;

/// qna configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QnaConfig {
    /// Storage settings
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Storage settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Which backend to use
    #[serde(default)]
    pub backend: Backend,

    /// Data file of the file backend (defaults to `~/.qna/qna.json`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl StorageConfig {
    /// File backend storing its tables at `path`
    #[must_use]
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            backend: Backend::File,
            path: Some(path.into()),
        }
    }

    /// Memory backend
    #[must_use]
    pub const fn memory() -> Self {
        Self {
            backend: Backend::Memory,
            path: None,
        }
    }

    /// Effective data file path
    #[must_use]
    pub fn data_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(paths::default_data_file)
    }
}

impl QnaConfig {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::config_file()
    }

    /// Load config from the default location, or defaults if absent
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load config from `path`, or defaults if the file does not exist
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {e}", path.display()))
    }

    /// Parse config from TOML text
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Save config to `path`
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Replace the data file, switching to the file backend
    pub fn set_data_path(&mut self, path: impl Into<PathBuf>) {
        self.storage = StorageConfig::file(path);
    }
}
