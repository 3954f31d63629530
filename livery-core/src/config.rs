//! Settings for the paintjob manager
//!
//! Settings live in a small YAML file owned by the embedding host. Every
//! field has a default so an absent file yields a working configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Logical path of the record file inside every content source
pub const DEFAULT_RECORDS_PATH: &str = "data/config/magic_paintjobs.csv";

/// Filename of the persisted unlock document
pub const DEFAULT_UNLOCKS_FILE: &str = "magic_paintjobs.json";

/// Paintjob manager settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LiverySettings {
    /// Whether paintjobs can be applied and the notice is shown
    pub enabled: bool,

    /// Unlock every paintjob as soon as it is registered
    pub test_mode: bool,

    /// Record file path relative to a content source root
    pub records_path: String,

    /// Unlock document filename inside the profile directory
    pub unlocks_file: String,

    /// Override for the profile-scoped storage directory
    pub profile_dir: Option<PathBuf>,
}

impl Default for LiverySettings {
    fn default() -> Self {
        Self {
            enabled: true,
            test_mode: false,
            records_path: DEFAULT_RECORDS_PATH.to_string(),
            unlocks_file: DEFAULT_UNLOCKS_FILE.to_string(),
            profile_dir: None,
        }
    }
}

impl LiverySettings {
    /// Load settings from a YAML file, or defaults if it does not exist
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings: {}", path.display()))?;

        Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse settings: {}", path.display()))
    }

    /// Parse settings from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml_ng::from_str(content).context("Invalid settings YAML")
    }

    /// Directory holding profile-scoped files such as the unlock document
    ///
    /// Uses the configured override when present, otherwise the platform
    /// data directory (e.g. `~/.local/share/livery` on Linux).
    pub fn resolve_profile_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.profile_dir {
            return Ok(dir.clone());
        }

        directories::ProjectDirs::from("", "", "livery")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .context("Could not determine profile directory")
    }
}
