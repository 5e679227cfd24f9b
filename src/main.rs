//! Velo CLI - the Builder pattern, one part at a time
//!
//! Entry point for the velo command-line application.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use velo::cli::output::display_error;
use velo::cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber; logs go to stderr so stdout stays parseable.
    // RUST_LOG decides unless -v or -q was given explicitly.
    let output_config = cli.output_config();
    let mut filter = EnvFilter::builder()
        .with_default_directive(output_config.log_level().into())
        .from_env_lossy();
    if output_config.overrides_log_level() {
        filter = filter.add_directive(output_config.log_level().into());
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Run the command and handle errors
    if let Err(e) = cli.run() {
        display_error(&e);
        std::process::exit(1);
    }
}
