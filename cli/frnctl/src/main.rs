//! frn - inspect, match, and mint resource names.

use anyhow::{Context, Result};
use clap::Parser;

mod commands;
mod config;
mod error;
mod output;

use commands::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match config::Config::from_env().context("failed to load configuration") {
        Ok(config) => config,
        Err(e) => {
            error::print_error(&e);
            std::process::exit(2);
        }
    };
    config::init_tracing(&config, cli.log_level());

    if let Err(e) = cli.run(config) {
        error::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
