use clap::{Parser, Subcommand};
use std::str::FromStr;

use crate::navigator::is_query_valid_order_number;
use crate::types::{QuickSearchMode, VALID_MODES};

#[derive(Parser)]
#[command(name = "dashnav")]
#[command(about = "Quick search command palette for the commerce dashboard")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive quick search palette
    #[command(visible_alias = "p")]
    Palette,

    /// List the actions the palette offers for a mode and query
    #[command(visible_alias = "a")]
    Actions {
        /// Mode: default, commands, orders (default: default)
        #[arg(short, long, default_value = "default", value_parser = parse_mode)]
        mode: QuickSearchMode,

        /// Search text
        #[arg(short, long, default_value = "")]
        query: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Look up an order by its number
    Order {
        /// Order number (digits only)
        #[arg(value_parser = parse_order_number)]
        number: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the config file path
    Path {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Output rendering shared by all commands
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    pub json: bool,
}

impl OutputOptions {
    pub fn json(json: bool) -> Self {
        Self { json }
    }
}

fn parse_with_validation<T, F>(
    s: &str,
    parser: F,
    field_name: &str,
    valid_values: &[&str],
) -> Result<T, String>
where
    F: FnOnce(&str) -> Result<T, String>,
{
    parser(s).map_err(|_| {
        format!(
            "Invalid {}. Must be one of: {}",
            field_name,
            valid_values.join(", ")
        )
    })
}

fn parse_mode(s: &str) -> Result<QuickSearchMode, String> {
    parse_with_validation(
        s,
        |v| QuickSearchMode::from_str(v).map_err(|_| String::new()),
        "mode",
        VALID_MODES,
    )
}

fn parse_order_number(s: &str) -> Result<String, String> {
    let s = s.trim().trim_start_matches('#');
    if s.is_empty() {
        return Err("Order number cannot be empty".to_string());
    }
    if !is_query_valid_order_number(s) {
        return Err(format!("Invalid order number '{s}': digits only"));
    }
    Ok(s.to_string())
}
