//! Error handling and display for the CLI.

use colored::Colorize;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("'{0}' is not a shape")]
    InvalidShape(String),

    #[error("'{parent}' cannot be the parent of shape '{shape}'")]
    ParentMismatch { parent: String, shape: String },

    #[error("{0}")]
    Frn(#[from] frn::FrnError),
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {:#}", "Error:".red().bold(), err);

    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        match cli_err {
            CliError::InvalidShape(_) => {
                eprintln!(
                    "\n{}",
                    "Hint: shapes look like `type`, `type/child`, or `type/child#key`.".yellow()
                );
            }
            CliError::ParentMismatch { .. } => {
                eprintln!(
                    "\n{}",
                    "Hint: the parent must have the shape one level above; check it with `frn inspect`."
                        .yellow()
                );
            }
            CliError::Frn(e) if e.is_not_set() => {
                eprintln!("\n{}", "Hint: pass a non-empty ID.".yellow());
            }
            CliError::Frn(_) => {}
        }
    }
}
