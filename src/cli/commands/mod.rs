//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod assemble;
pub mod build;
pub mod demo;

use anyhow::Result;
use clap::Subcommand;

use super::output::OutputConfig;
use crate::core::builder::PartStep;
use crate::core::config::VeloConfig;
use crate::core::director::Recipe;

/// State shared by every command
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Loaded configuration
    pub config: VeloConfig,
    /// Output settings
    pub output: OutputConfig,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Walk through the director builds and a direct build
    Demo,

    /// Build a velo from one of the director's recipes
    Build {
        /// Recipe to run (minimal, full)
        recipe: Recipe,
    },

    /// Call production steps directly, bypassing the director
    Assemble {
        /// Steps to run in order (guidon, cadre, roue)
        steps: Vec<PartStep>,
    },
}

impl Commands {
    /// Execute the command
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        match self {
            Self::Demo => demo::execute(ctx),
            Self::Build { recipe } => build::execute(ctx, recipe),
            Self::Assemble { steps } => assemble::execute(ctx, &steps),
        }
    }
}
