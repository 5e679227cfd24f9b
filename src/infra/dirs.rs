//! Platform-specific directory management
//!
//! Locates the directory holding the velo config file. Follows the XDG Base
//! Directory Specification on Linux and standard locations on macOS.
//!
//! The `VELO_CONFIG_DIR` environment variable overrides the default. An empty
//! value counts as unset.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::config::defaults::{APP_NAME, CONFIG_FILE_NAME};

/// Environment variable overriding the config directory
pub const ENV_CONFIG_DIR: &str = "VELO_CONFIG_DIR";

/// Platform-specific directory provider for velo
#[derive(Debug, Clone)]
pub struct VeloDirs {
    config_dir: PathBuf,
}

impl VeloDirs {
    /// Create a new `VeloDirs` instance
    ///
    /// Checks the environment variable first, then falls back to the
    /// platform default.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config_dir: Self::resolve_config_dir(),
        }
    }

    /// Use an explicit config directory
    #[must_use]
    pub fn with_config_dir(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    /// Get the config directory path
    ///
    /// - Linux: `$XDG_CONFIG_HOME/velo` or `~/.config/velo`
    /// - macOS: `~/Library/Application Support/velo`
    #[must_use]
    pub fn config_dir(&self) -> PathBuf {
        self.config_dir.clone()
    }

    /// Get the config file path
    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }

    fn resolve_config_dir() -> PathBuf {
        if let Some(path) = config_dir_override(env::var_os(ENV_CONFIG_DIR)) {
            return path;
        }

        dirs::config_dir()
            .map(|p| p.join(APP_NAME))
            .unwrap_or_else(|| {
                // Fallback to home directory
                dirs::home_dir()
                    .map(|h| h.join(".config").join(APP_NAME))
                    .unwrap_or_else(|| PathBuf::from(".").join(".config").join(APP_NAME))
            })
    }
}

/// Override path from the environment value, ignoring empty values
fn config_dir_override(value: Option<OsString>) -> Option<PathBuf> {
    value.filter(|v| !v.is_empty()).map(PathBuf::from)
}

impl Default for VeloDirs {
    fn default() -> Self {
        Self::new()
    }
}
