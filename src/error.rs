//! Error types for velo
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Director errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectorError {
    /// A recipe was run before any builder was assigned
    #[error("No builder assigned to the director. Call set_builder first")]
    NoBuilder,

    /// The assigned builder is already borrowed elsewhere
    #[error("Builder is already in use")]
    BuilderBusy,
}

/// Errors parsing step and recipe names
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Unknown production step name
    #[error("Unknown part step '{name}': expected one of {expected:?}")]
    UnknownStep {
        name: String,
        expected: &'static [&'static str],
    },

    /// Unknown director recipe name
    #[error("Unknown recipe '{name}': expected one of {expected:?}")]
    UnknownRecipe {
        name: String,
        expected: &'static [&'static str],
    },
}

/// Configuration file errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Explicitly requested config file does not exist
    #[error("Config file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read config file
    #[error("Failed to read config file '{path}': {error}")]
    Read { path: PathBuf, error: String },

    /// Failed to parse config file
    #[error("Failed to parse config file '{path}': {error}")]
    Parse { path: PathBuf, error: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_builder_message_names_the_fix() {
        let msg = DirectorError::NoBuilder.to_string();
        assert!(msg.contains("set_builder"));
    }

    #[test]
    fn test_unknown_step_lists_accepted_names() {
        let err = ParseError::UnknownStep {
            name: "saddle".to_string(),
            expected: &["guidon", "cadre", "roue"],
        };
        assert_eq!(
            err.to_string(),
            r#"Unknown part step 'saddle': expected one of ["guidon", "cadre", "roue"]"#
        );
    }

    #[test]
    fn test_config_error_includes_path() {
        let err = ConfigError::NotFound {
            path: PathBuf::from("/tmp/missing.toml"),
        };
        assert!(err.to_string().contains("/tmp/missing.toml"));
    }
}
