//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Test project context
///
/// A temporary directory used as both working directory and config
/// directory, so runs never pick up the user's own config file.
pub struct TestProject {
    /// Temporary directory for the test project
    pub dir: TempDir,
}

impl TestProject {
    /// Create a new test project in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Get the path to the test project directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a file in the test project
    #[allow(dead_code)]
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Run the velo binary with arguments
    pub fn run(&self, args: &[&str]) -> Output {
        self.run_with_env(args, &[])
    }

    /// Run the velo binary with arguments and extra environment variables
    pub fn run_with_env(&self, args: &[&str], envs: &[(&str, &str)]) -> Output {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_velo"));
        cmd.current_dir(self.path())
            .env("VELO_CONFIG_DIR", self.path())
            .env_remove("VELO_CONFIG")
            .env_remove("RUST_LOG");
        for (key, value) in envs {
            cmd.env(key, value);
        }
        for arg in args {
            cmd.arg(arg);
        }
        cmd.output().expect("Failed to execute velo")
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Stdout of a run as a string
#[allow(dead_code)]
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Stderr of a run as a string
#[allow(dead_code)]
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Config file renaming every part label
#[allow(dead_code)]
pub const SAMPLE_CONFIG: &str = r#"
[labels]
guidon = "Handlebar"
cadre = "Frame"
roue = "Wheel"
"#;
