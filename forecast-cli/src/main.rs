//! Binary crate for the `forecast` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - The interactive zip-code prompt loop
//! - Human-friendly output formatting

use clap::Parser;
use forecast_core::ZipCodeMap;
use tracing_subscriber::EnvFilter;

mod cli;
mod prompt;

fn main() -> anyhow::Result<()> {
    // Quiet by default so log lines never interleave with prompts;
    // RUST_LOG overrides for debugging.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = cli::Cli::parse();
    let map = ZipCodeMap::bundled()?;

    let scale = match args.temp_scale() {
        Some(scale) => scale,
        None => match prompt::prompt_for_temp_scale()? {
            Some(scale) => scale,
            None => {
                prompt::print_exit_message();
                return Ok(());
            }
        },
    };

    prompt::ForecastLoop::new(map, scale).run()?;
    prompt::print_exit_message();

    Ok(())
}
