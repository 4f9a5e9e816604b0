//! CLI commands.

mod check;
mod inspect;
mod mint;
mod sample;
mod shape;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::output::OutputFormat;

/// frn - inspect, match, and mint resource names.
#[derive(Debug, Parser)]
#[command(name = "frn")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json).
    #[arg(long, global = true, default_value = "table", env = "FRN_FORMAT")]
    format: String,

    /// Environment for composed IDs (empty or `prd` selects the default namespace).
    #[arg(long, global = true)]
    env: Option<String>,

    /// Service code for composed IDs.
    #[arg(long, global = true)]
    service: Option<String>,

    /// Log level, overriding FRN_LOG_LEVEL.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show every field of one or more IDs.
    Inspect(inspect::InspectCommand),

    /// Check an ID against one or more patterns.
    Check(check::CheckCommand),

    /// Break a shape into its levels.
    Shape(shape::ShapeCommand),

    /// Build a sample ID of a shape.
    Sample(sample::SampleCommand),

    /// Compose new IDs.
    New(mint::NewCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    pub fn log_level(&self) -> Option<&str> {
        self.log_level.as_deref()
    }

    /// Run the CLI command.
    pub fn run(self, config: Config) -> Result<()> {
        let ctx = CommandContext {
            format: OutputFormat::parse(&self.format),
            config: config
                .with_overrides(self.env, self.service)
                .context("invalid namespace override")?,
        };

        match self.command {
            Commands::Inspect(cmd) => cmd.run(&ctx),
            Commands::Check(cmd) => cmd.run(&ctx),
            Commands::Shape(cmd) => cmd.run(&ctx),
            Commands::Sample(cmd) => cmd.run(&ctx),
            Commands::New(cmd) => cmd.run(&ctx),
            Commands::Version => {
                println!("frn {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub config: Config,
    pub format: OutputFormat,
}
