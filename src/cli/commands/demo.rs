//! Demo command implementation
//!
//! Implements `velo demo`, the default when no subcommand is given.

use anyhow::{Context, Result};

use super::CommandContext;
use crate::core::assembly;

/// Execute the demo command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    tracing::info!("Running builder demo");
    let velos = assembly::demo(ctx.config.labels.clone()).context("Demo build failed")?;
    ctx.output.print_velos(&velos)
}
