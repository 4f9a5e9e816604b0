//! New command: compose IDs with generated or explicit values.

use anyhow::{bail, Result};
use clap::Args;
use frn::{Id, IdFactory, Sequence, Type};
use serde::Serialize;
use tabled::Tabled;
use tracing::debug;

use crate::output::print_output;

use super::CommandContext;

#[derive(Debug, Args)]
pub struct NewCommand {
    /// Primary type, e.g. `project`.
    ty: String,

    /// Primary value; generated when omitted.
    #[arg(long)]
    value: Option<String>,

    /// Child type to append.
    #[arg(long, requires = "child_value")]
    child_type: Option<String>,

    /// Child value; `-` generates one.
    #[arg(long, requires = "child_type")]
    child_value: Option<String>,

    /// Use sequential values starting after this number instead of ULIDs.
    #[arg(long)]
    sequence: Option<i64>,

    /// Number of IDs to compose.
    #[arg(long, default_value = "1")]
    count: usize,
}

#[derive(Debug, Clone, Serialize, Tabled)]
struct NewRow {
    #[tabled(rename = "ID")]
    id: String,

    #[tabled(rename = "Valid")]
    valid: bool,
}

impl NewCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let ids = self.compose(ctx)?;
        let rows: Vec<NewRow> = ids
            .iter()
            .map(|id| NewRow {
                id: id.to_string(),
                valid: id.is_valid(),
            })
            .collect();
        print_output(&rows, ctx.format);
        Ok(())
    }

    fn compose(&self, ctx: &CommandContext) -> Result<Vec<Id>> {
        if self.count == 0 {
            bail!("--count must be at least 1");
        }

        let mut factory = IdFactory::new(ctx.config.namespace(), Type::new(self.ty.as_str()));
        if let Some(start) = self.sequence {
            factory = factory.with_generator(Sequence::new(start));
        }
        debug!(?factory, count = self.count, "Composing IDs");

        let ids = (0..self.count)
            .map(|_| {
                let id = match &self.value {
                    Some(value) => factory.with_value(value),
                    None => factory.new_id(),
                };
                match (&self.child_type, self.child_value.as_deref()) {
                    (Some(child_type), Some("-")) => {
                        let child_value = factory.new_id();
                        id.sub(child_type, child_value.value())
                    }
                    (Some(child_type), Some(child_value)) => id.sub(child_type, child_value),
                    _ => id,
                }
            })
            .collect();

        Ok(ids)
    }
}
