//! Assemble command implementation
//!
//! Implements `velo assemble <step>...`. An empty step list yields an
//! empty velo.

use anyhow::Result;

use super::CommandContext;
use crate::core::assembly;
use crate::core::builder::PartStep;

/// Execute the assemble command
pub fn execute(ctx: &CommandContext, steps: &[PartStep]) -> Result<()> {
    let velo = assembly::assemble_steps(ctx.config.labels.clone(), steps);
    ctx.output.print_velo(&velo)
}
