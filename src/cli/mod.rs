//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! It contains no business logic - that belongs in the [`crate::core`] module.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use commands::{CommandContext, Commands};
use output::OutputConfig;

use crate::core::config::VeloConfig;
use crate::infra::dirs::VeloDirs;

/// Velo - the Builder pattern, one part at a time
///
/// Assemble velos from parts, either through a director's fixed recipes
/// or by calling production steps directly.
#[derive(Parser, Debug)]
#[command(name = "velo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to a config file
    ///
    /// Also read from `VELO_CONFIG`; setting that variable to an empty
    /// string is rejected as a missing value.
    #[arg(long, global = true, env = "VELO_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Output settings from the global flags
    pub fn output_config(&self) -> OutputConfig {
        OutputConfig::new(self.quiet, self.json, self.verbose)
    }

    /// Execute the CLI command
    ///
    /// Without a subcommand the demo runs.
    pub fn run(self) -> Result<()> {
        let output = self.output_config();
        let config = VeloConfig::resolve(self.config.as_deref(), &VeloDirs::new())
            .context("Failed to load configuration")?;

        let ctx = CommandContext { config, output };
        self.command.unwrap_or(Commands::Demo).run(&ctx)
    }
}
