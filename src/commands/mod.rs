mod actions;
mod config;
mod order;
pub mod palette;

pub use actions::cmd_actions;
pub use config::{cmd_config_path, cmd_config_show};
pub use order::cmd_order;
pub use palette::cmd_palette;

use owo_colors::OwoColorize;
use serde_json::Value;

use crate::cli::OutputOptions;
use crate::error::Result;
use crate::navigator::{QuickSearchAction, QuickSearchActionType};

/// Output of a command in both renderings; `--json` picks which one is printed
pub struct CommandOutput {
    json: Value,
    text: Option<String>,
}

impl CommandOutput {
    pub fn new(json: Value) -> Self {
        Self { json, text: None }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn print(self, output: OutputOptions) -> Result<()> {
        if output.json {
            println!("{}", serde_json::to_string_pretty(&self.json)?);
        } else if let Some(text) = self.text {
            println!("{}", text);
        } else {
            println!("{}", serde_json::to_string_pretty(&self.json)?);
        }
        Ok(())
    }
}

fn action_symbol(action: &QuickSearchAction) -> &str {
    if let Some(symbol) = action.symbol.as_deref() {
        return symbol;
    }
    match action.action_type {
        QuickSearchActionType::Action => "+",
        QuickSearchActionType::View => ">",
        QuickSearchActionType::Order => "#",
    }
}

/// Format an action for single-line display, numbered from 1
pub fn format_action_line(index: usize, action: &QuickSearchAction) -> String {
    let number = format!("{:>2}.", index);
    let mut line = format!(
        "{} {} {}",
        number.dimmed(),
        action_symbol(action).cyan(),
        action.label.bold()
    );
    if let Some(caption) = &action.caption {
        line.push_str(&format!("  {}", caption.dimmed()));
    }
    line
}

/// Format a whole action list, or a placeholder when it is empty
pub fn format_action_list(actions: &[QuickSearchAction]) -> String {
    if actions.is_empty() {
        return "  (no matching actions)".dimmed().to_string();
    }
    actions
        .iter()
        .enumerate()
        .map(|(i, action)| format_action_line(i + 1, action))
        .collect::<Vec<_>>()
        .join("\n")
}
