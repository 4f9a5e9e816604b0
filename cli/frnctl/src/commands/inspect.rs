//! Inspect command: every field of an ID.

use anyhow::Result;
use clap::Args;
use frn::Id;
use serde::Serialize;
use tabled::Tabled;
use tracing::debug;

use crate::output::{display_blank, print_output};

use super::CommandContext;

#[derive(Debug, Args)]
pub struct InspectCommand {
    /// IDs to inspect.
    #[arg(required = true)]
    ids: Vec<String>,
}

impl InspectCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let rows: Vec<IdRow> = self.ids.into_iter().map(|s| IdRow::from(&Id::new(s))).collect();
        debug!(count = rows.len(), "Inspected IDs");
        print_output(&rows, ctx.format);
        Ok(())
    }
}

/// One inspected ID.
#[derive(Debug, Clone, Serialize, Tabled)]
struct IdRow {
    #[tabled(rename = "ID")]
    id: String,

    #[tabled(rename = "Valid")]
    valid: bool,

    #[tabled(rename = "Namespace", display = "display_blank")]
    namespace: String,

    #[tabled(rename = "Type", display = "display_blank")]
    ty: String,

    #[tabled(rename = "Value", display = "display_blank")]
    value: String,

    #[tabled(rename = "Child", display = "display_blank")]
    child: String,

    #[tabled(rename = "Parent", display = "display_blank")]
    parent: String,

    #[tabled(rename = "Path Key", display = "display_blank")]
    path_key: String,

    #[tabled(rename = "Path Value", display = "display_blank")]
    path_value: String,

    #[tabled(rename = "Shape", display = "display_blank")]
    shape: String,
}

impl From<&Id> for IdRow {
    fn from(id: &Id) -> Self {
        let (path_key, path_value) = id.path().unwrap_or_default();
        Self {
            id: id.to_string(),
            valid: id.is_valid(),
            namespace: id.namespace().to_string(),
            ty: id.ty().to_string(),
            value: id.value().to_string(),
            child: id.child().to_string(),
            parent: id.parent().to_string(),
            path_key: path_key.to_string(),
            path_value: path_value.to_string(),
            shape: id.shape(),
        }
    }
}
