//! Shape command: levels of a shape and its parent.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::error::CliError;
use crate::output::{display_blank, print_output};

use super::CommandContext;

#[derive(Debug, Args)]
pub struct ShapeCommand {
    /// Shape such as `project/contract#key`.
    shape: String,
}

#[derive(Debug, Clone, Serialize, Tabled)]
struct ShapeRow {
    #[tabled(rename = "Shape")]
    shape: String,

    #[tabled(rename = "Primary")]
    primary: String,

    #[tabled(rename = "Child", display = "display_blank")]
    child: String,

    #[tabled(rename = "Path Key", display = "display_blank")]
    path_key: String,

    #[tabled(rename = "Parent Shape", display = "display_blank")]
    parent: String,
}

impl ShapeCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let row = shape_row(&self.shape).context("parsing shape")?;
        print_output(&[row], ctx.format);
        Ok(())
    }
}

fn shape_row(shape: &str) -> Result<ShapeRow, CliError> {
    let slice = frn::try_shape_slice(shape)
        .filter(|[primary, ..]| !primary.is_empty())
        .ok_or_else(|| CliError::InvalidShape(shape.to_string()))?;
    let parent = frn::shape_slice_value(&frn::parent_shape(&slice));
    let [primary, child, path_key] = slice;

    Ok(ShapeRow {
        shape: shape.to_string(),
        primary,
        child,
        path_key,
        parent,
    })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::primary("project", ["project", "", ""], "")]
    #[case::child("project/contract", ["project", "contract", ""], "project")]
    #[case::path("project#change", ["project", "", "change"], "project")]
    #[case::full("project/contract#change", ["project", "contract", "change"], "project/contract")]
    fn test_shape_row(#[case] shape: &str, #[case] levels: [&str; 3], #[case] parent: &str) {
        let row = shape_row(shape).unwrap();
        assert_eq!([row.primary.as_str(), row.child.as_str(), row.path_key.as_str()], levels);
        assert_eq!(row.parent, parent);
    }

    #[test]
    fn test_shape_row_rejects_garbage() {
        assert!(matches!(shape_row("#"), Err(CliError::InvalidShape(_))));
        assert!(matches!(shape_row("-project"), Err(CliError::InvalidShape(_))));
        assert!(matches!(shape_row(""), Err(CliError::InvalidShape(_))));
    }
}
