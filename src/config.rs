//! Runtime configuration
//!
//! Read from `forge.ron` in the working directory, then from the platform
//! config directory. Missing or broken files fall back to the defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::DataError;
use crate::items::PowerTier;

pub const CONFIG_FILE: &str = "forge.ron";

/// Generator settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForgeConfig {
    /// Directory holding `tables.ron`
    pub data_dir: PathBuf,
    /// Fixed RNG seed for reproducible output
    pub seed: Option<u64>,
    /// Power tier used when none is given
    pub power: PowerTier,
}

impl Default for ForgeConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("assets/data"),
            seed: None,
            power: PowerTier::Minor,
        }
    }
}

/// Platform config directory, if one can be determined
pub fn config_directory() -> Option<PathBuf> {
    use directories::ProjectDirs;

    ProjectDirs::from("com", "magicforge", "Magicforge").map(|dirs| dirs.config_dir().to_path_buf())
}

impl ForgeConfig {
    /// Parse one config file
    pub fn from_file(path: &Path) -> Result<Self, DataError> {
        let content = fs::read_to_string(path).map_err(|e| DataError::io(path, e))?;
        ron::from_str(&content).map_err(|source| DataError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// First config found in the working directory or the platform config directory
    pub fn load() -> Self {
        let candidates = std::iter::once(PathBuf::from(CONFIG_FILE))
            .chain(config_directory().map(|dir| dir.join(CONFIG_FILE)));

        for path in candidates {
            if !path.exists() {
                continue;
            }
            match Self::from_file(&path) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    return config;
                }
                Err(e) => log::warn!("{}. Using default config.", e),
            }
        }
        Self::default()
    }
}
