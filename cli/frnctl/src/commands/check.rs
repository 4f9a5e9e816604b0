//! Check command: match an ID against patterns.

use anyhow::{Context, Result};
use clap::Args;
use frn::Id;
use serde::Serialize;
use tracing::debug;

use crate::error::CliError;
use crate::output::print_success;

use super::CommandContext;

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// ID to check.
    id: String,

    /// Pattern such as `project`, `project/contract`, `/contract`, or
    /// `project#key`. Repeat to accept any of several.
    #[arg(short, long = "pattern", required = true)]
    patterns: Vec<String>,
}

#[derive(Debug, Serialize)]
struct CheckResult<'a> {
    id: &'a str,
    matched: bool,
    patterns: &'a [String],
}

impl CheckCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let id = Id::new(self.id);
        debug!(%id, patterns = ?self.patterns, "Checking ID");

        frn::validate(&id, self.patterns.as_slice())
            .map_err(CliError::from)
            .with_context(|| format!("checking '{id}'"))?;

        let result = CheckResult {
            id: id.as_str(),
            matched: true,
            patterns: &self.patterns,
        };
        print_success(
            &format!("{id} matches {}", self.patterns.join(" | ")),
            &result,
            ctx.format,
        );
        Ok(())
    }
}
