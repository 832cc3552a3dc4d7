//! Centralized path definitions for qna
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.qna/
//! ├── config.toml      # Storage backend and data file location
//! └── qna.json         # Tables of the file backend
//! ```
//!
//! `QNA_CONFIG` points at an alternative config file.

use std::path::PathBuf;

/// Environment variable naming an alternative config file
pub const CONFIG_ENV: &str = "QNA_CONFIG";

/// Directory name under the home directory
const QNA_DIR: &str = ".qna";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// Data filename of the file backend
const DATA_FILE: &str = "qna.json";

/// Get the qna directory.
///
/// Returns `~/.qna/`.
#[must_use]
pub fn qna_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(QNA_DIR)
}

/// Get the config file path.
///
/// `QNA_CONFIG` wins when set, otherwise `~/.qna/config.toml`.
#[must_use]
pub fn config_file() -> PathBuf {
    std::env::var_os(CONFIG_ENV)
        .filter(|v| !v.is_empty())
        .map_or_else(|| qna_dir().join(CONFIG_FILE), PathBuf::from)
}

/// Get the default data file path.
///
/// Returns `~/.qna/qna.json`.
#[must_use]
pub fn default_data_file() -> PathBuf {
    qna_dir().join(DATA_FILE)
}
