//! Output formatting for CLI commands.

use colored::Colorize;
use serde::Serialize;
use tabled::{Table, Tabled};

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON format.
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Self {
        match s {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Table,
        }
    }
}

/// Print rows in the specified format.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if data.is_empty() {
                println!("{}", "No items found.".dimmed());
            } else {
                println!("{}", Table::new(data));
            }
        }
        OutputFormat::Json => println!("{}", format_json(data, "[]")),
    }
}

/// Print a success message, or the payload as JSON.
pub fn print_success<T: Serialize>(message: &str, payload: &T, format: OutputFormat) {
    match format {
        OutputFormat::Table => println!("{} {}", "Success:".green().bold(), message),
        OutputFormat::Json => println!("{}", format_json(payload, "{}")),
    }
}

fn format_json<T: Serialize + ?Sized>(data: &T, fallback: &str) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|_| fallback.to_string())
}

/// Renders an empty cell as `-`.
pub fn display_blank(s: &str) -> String {
    if s.is_empty() {
        "-".to_string()
    } else {
        s.to_string()
    }
}
