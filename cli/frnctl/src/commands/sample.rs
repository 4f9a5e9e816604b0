//! Sample command: build a placeholder ID of a shape.

use anyhow::{Context, Result};
use clap::Args;
use frn::{Id, Namespace};
use serde::Serialize;
use tracing::debug;

use crate::error::CliError;
use crate::output::print_success;

use super::CommandContext;

#[derive(Debug, Args)]
pub struct SampleCommand {
    /// Shape of the ID to build.
    shape: String,

    /// Parent ID one level above the shape; omit for primary shapes.
    #[arg(long)]
    parent: Option<String>,
}

#[derive(Debug, Serialize)]
struct SampleResult<'a> {
    shape: &'a str,
    id: &'a Id,
}

impl SampleCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let ns = ctx.config.namespace();
        let id = sample(&ns, self.parent.as_deref().unwrap_or_default(), &self.shape)
            .with_context(|| format!("sampling shape '{}' in {ns}", self.shape))?;
        debug!(%ns, %id, "Built sample ID");

        print_success(
            id.as_str(),
            &SampleResult {
                shape: &self.shape,
                id: &id,
            },
            ctx.format,
        );
        Ok(())
    }
}

fn sample(ns: &Namespace, parent: &str, shape: &str) -> Result<Id, CliError> {
    let slice = frn::try_shape_slice(shape)
        .filter(|[primary, ..]| !primary.is_empty())
        .ok_or_else(|| CliError::InvalidShape(shape.to_string()))?;

    frn::sample_via_shape_slice(ns, &Id::new(parent), &slice).ok_or_else(|| {
        CliError::ParentMismatch {
            parent: parent.to_string(),
            shape: shape.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_child() {
        let ns = Namespace::new("dev", "crm");
        let id = sample(&ns, "dev:crm:project:1", "project/contract").unwrap();
        assert_eq!(id, "dev:crm:project:1:contract:_");
    }

    #[test]
    fn test_sample_primary() {
        let ns = Namespace::new("", "crm");
        assert_eq!(sample(&ns, "", "project").unwrap(), "fm:crm:project:_");
    }

    #[test]
    fn test_sample_parent_mismatch() {
        let ns = Namespace::new("dev", "crm");
        assert!(matches!(
            sample(&ns, "dev:crm:user:1", "project#work_item"),
            Err(CliError::ParentMismatch { .. })
        ));
        assert!(matches!(sample(&ns, "", ""), Err(CliError::InvalidShape(_))));
        assert!(matches!(sample(&ns, "", "-project"), Err(CliError::InvalidShape(_))));
    }
}
