//! Build command implementation
//!
//! Implements `velo build <recipe>`.

use anyhow::{Context, Result};

use super::CommandContext;
use crate::core::assembly;
use crate::core::director::Recipe;

/// Execute the build command
pub fn execute(ctx: &CommandContext, recipe: Recipe) -> Result<()> {
    tracing::info!("Building velo with recipe '{recipe}'");
    let velo = assembly::build_recipe(ctx.config.labels.clone(), recipe)
        .with_context(|| format!("Failed to build '{recipe}' velo"))?;
    ctx.output.print_velo(&velo)
}
