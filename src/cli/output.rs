//! Output formatting
//!
//! Renders assembled velos as text or JSON and reports errors.

use anyhow::Result;

use crate::core::assembly::AssembledVelo;

/// Output settings taken from the global flags
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Suppress all output except errors
    pub quiet: bool,
    /// Emit JSON instead of text
    pub json: bool,
    /// Verbosity count
    pub verbose: u8,
}

impl OutputConfig {
    /// Create output settings
    pub fn new(quiet: bool, json: bool, verbose: u8) -> Self {
        Self {
            quiet,
            json,
            verbose,
        }
    }

    /// Log level implied by the flags
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            return tracing::Level::ERROR;
        }
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        }
    }

    /// Whether the flags ask for a log level over `RUST_LOG`
    pub fn overrides_log_level(&self) -> bool {
        self.quiet || self.verbose > 0
    }

    /// Print a single velo
    pub fn print_velo(&self, velo: &AssembledVelo) -> Result<()> {
        if self.quiet {
            return Ok(());
        }
        if self.json {
            println!("{}", serde_json::to_string_pretty(velo)?);
        } else {
            println!("{}", render_velo(velo));
        }
        Ok(())
    }

    /// Print several velos, separated by a blank line in text mode
    pub fn print_velos(&self, velos: &[AssembledVelo]) -> Result<()> {
        if self.quiet {
            return Ok(());
        }
        if self.json {
            println!("{}", serde_json::to_string_pretty(velos)?);
        } else {
            let blocks: Vec<String> = velos.iter().map(render_velo).collect();
            println!("{}", blocks.join("\n\n"));
        }
        Ok(())
    }
}

/// Text rendering of one velo
pub fn render_velo(velo: &AssembledVelo) -> String {
    let parts = if velo.product.is_empty() {
        "(none)".to_string()
    } else {
        velo.product.to_string()
    };
    format!("{}:\nProduct parts: {parts}", velo.title)
}

/// Print an error to stderr
pub fn display_error(error: &anyhow::Error) {
    eprintln!("{} Error: {error:#}", status::ERROR);
}

/// Status message prefixes
pub mod status {
    /// Error prefix (red X)
    pub const ERROR: &str = "✗";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::assembly::{assemble_steps, build_recipe};
    use crate::core::builder::PartStep;
    use crate::core::director::Recipe;
    use crate::core::standard::PartLabels;

    #[test]
    fn test_render_full_velo() {
        let velo = build_recipe(PartLabels::default(), Recipe::Full).unwrap();
        assert_eq!(
            render_velo(&velo),
            "Standard full featured velo:\nProduct parts: PartA1, PartB1, PartC1"
        );
    }

    #[test]
    fn test_render_custom_velo() {
        let velo = assemble_steps(PartLabels::default(), &[PartStep::Guidon, PartStep::Roue]);
        assert_eq!(render_velo(&velo), "Custom velo:\nProduct parts: PartA1, PartC1");
    }

    #[test]
    fn test_render_empty_velo() {
        let velo = assemble_steps(PartLabels::default(), &[]);
        assert_eq!(render_velo(&velo), "Custom velo:\nProduct parts: (none)");
    }

    #[test]
    fn test_log_level_from_flags() {
        assert_eq!(OutputConfig::new(false, false, 0).log_level(), tracing::Level::WARN);
        assert_eq!(OutputConfig::new(false, false, 1).log_level(), tracing::Level::INFO);
        assert_eq!(OutputConfig::new(false, false, 3).log_level(), tracing::Level::DEBUG);
        assert_eq!(OutputConfig::new(true, false, 2).log_level(), tracing::Level::ERROR);
    }

    #[test]
    fn test_only_explicit_flags_override_rust_log() {
        assert!(!OutputConfig::new(false, true, 0).overrides_log_level());
        assert!(OutputConfig::new(false, false, 1).overrides_log_level());
        assert!(OutputConfig::new(true, false, 0).overrides_log_level());
    }
}
