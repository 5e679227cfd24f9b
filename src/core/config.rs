//! Configuration file handling
//!
//! Reads `config.toml`, which can rename the labels the standard builder
//! appends. A missing default file means defaults; an invalid file is an
//! error.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::core::standard::PartLabels;
use crate::error::ConfigError;
use crate::infra::dirs::VeloDirs;

/// Velo configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct VeloConfig {
    /// Part labels used by the standard builder
    #[serde(default)]
    pub labels: PartLabels,
}

impl VeloConfig {
    /// Load configuration for a run
    ///
    /// An explicit path must exist. Otherwise the file in the config
    /// directory is used if present.
    pub fn resolve(explicit: Option<&Path>, dirs: &VeloDirs) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound {
                        path: path.to_path_buf(),
                    });
                }
                Self::load_from_path(path)
            }
            None => Self::load(dirs),
        }
    }

    /// Load configuration from the config directory
    pub fn load(dirs: &VeloDirs) -> Result<Self, ConfigError> {
        Self::load_from_path(&dirs.config_path())
    }

    /// Load configuration from a specific path
    ///
    /// Returns defaults if the file does not exist.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config = Self::from_toml(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
