//! Configuration primitives for ExamTrack.
//!
//! Stored in a machine-readable TOML file located at:
//!   %APPDATA%/ExamTrack/config.toml on Windows
//!   $XDG_DATA_HOME/ExamTrack/config.toml on Linux
//!   ~/Library/Application Support/ExamTrack/config.toml on macOS
//!
//! The config carries per-install study defaults (topic estimate presets).
//! These are guidance for the entry forms; the entities themselves accept
//! any positive estimate.

use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Root configuration persisted per installation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Topic estimate presets used when creating new topics.
    #[serde(default)]
    pub study: StudySettings,
}

/// Study-time estimate presets tied to the local install.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudySettings {
    /// Estimate assigned to a topic when the user does not pick one.
    #[serde(default = "default_estimated_minutes")]
    pub default_estimated_minutes: u32,
    /// Granularity of the estimate picker.
    #[serde(default = "default_estimate_step")]
    pub estimate_step: u32,
    /// Lower bound offered by the estimate picker.
    #[serde(default = "default_estimate_min")]
    pub estimate_min: u32,
    /// Upper bound offered by the estimate picker.
    #[serde(default = "default_estimate_max")]
    pub estimate_max: u32,
}

impl Default for StudySettings {
    fn default() -> Self {
        Self {
            default_estimated_minutes: default_estimated_minutes(),
            estimate_step: default_estimate_step(),
            estimate_min: default_estimate_min(),
            estimate_max: default_estimate_max(),
        }
    }
}

const fn default_estimated_minutes() -> u32 {
    60
}

const fn default_estimate_step() -> u32 {
    15
}

const fn default_estimate_min() -> u32 {
    15
}

const fn default_estimate_max() -> u32 {
    480
}

/// Standard relative path to the config file (resolved per OS at runtime).
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Returns the root directory where ExamTrack stores data.
///
/// Order of precedence:
/// 1. `EXAMTRACK_HOME` environment variable.
/// 2. OS-specific data directory via `directories::BaseDirs`.
pub fn workspace_root() -> Result<PathBuf> {
    if let Ok(path) = env::var("EXAMTRACK_HOME") {
        return Ok(PathBuf::from(path));
    }
    let base_dirs = BaseDirs::new().context("Unable to determine OS data directory")?;
    Ok(base_dirs.data_dir().join("ExamTrack"))
}

/// Path to the config file.
pub fn config_file_path() -> Result<PathBuf> {
    Ok(workspace_root()?.join(CONFIG_FILE_NAME))
}

/// Loads the configuration from disk or returns defaults.
pub fn load_or_default() -> Result<AppConfig> {
    let path = config_file_path()?;
    if path.exists() {
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let cfg: AppConfig = toml::from_str(&data)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        Ok(cfg)
    } else {
        Ok(AppConfig::default())
    }
}

/// Persists the configuration to disk.
pub fn save(config: &AppConfig) -> Result<()> {
    let root = workspace_root()?;
    fs::create_dir_all(&root)?;
    let path = config_file_path()?;
    let data = toml::to_string_pretty(config)?;
    fs::write(&path, data)?;
    Ok(())
}
