//! Configuration commands.
//!
//! - `config show`: Display the effective configuration
//! - `config path`: Print the config file location

use owo_colors::OwoColorize;
use serde_json::json;

use super::CommandOutput;
use crate::cli::OutputOptions;
use crate::config::Config;
use crate::error::Result;

/// Mask a sensitive value by showing only the first 2 and last 2 characters
fn mask_sensitive_value(value: &str) -> String {
    let char_count = value.chars().count();
    if char_count > 4 {
        let first: String = value.chars().take(2).collect();
        let last: String = value.chars().skip(char_count - 2).collect();
        format!("{first}...{last}")
    } else {
        "****".to_string()
    }
}

/// Show the effective configuration, with environment overrides applied
pub fn cmd_config_show(output: OutputOptions) -> Result<()> {
    let config = Config::load()?;
    let token = config.token().map(|t| mask_sensitive_value(&t));

    let json_output = json!({
        "api_url": config.api_url(),
        "dashboard_url": config.dashboard_url(),
        "auth": {
            "token_configured": token.is_some(),
        },
        "request_timeout": config.request_timeout,
        "max_actions": config.max_actions,
        "message_overrides": config.messages.len(),
        "config_file": Config::config_path().to_string_lossy(),
    });

    let mut text_output = String::new();
    text_output.push_str(&format!("{}\n\n", "Configuration:".cyan().bold()));
    text_output.push_str(&format!("{}: {}\n", "api_url".cyan(), config.api_url()));
    text_output.push_str(&format!(
        "{}: {}\n",
        "dashboard_url".cyan(),
        config.dashboard_url()
    ));

    let token_status = match &token {
        Some(masked) => masked.green().to_string(),
        None => "not configured".dimmed().to_string(),
    };
    text_output.push_str(&format!("{}:\n  token: {token_status}\n", "auth".cyan()));
    text_output.push_str(&format!(
        "{}: {}s\n",
        "request_timeout".cyan(),
        config.request_timeout
    ));
    text_output.push_str(&format!("{}: {}\n", "max_actions".cyan(), config.max_actions));
    if !config.messages.is_empty() {
        text_output.push_str(&format!(
            "{}: {} override(s)\n",
            "messages".cyan(),
            config.messages.len()
        ));
    }

    text_output.push('\n');
    text_output.push_str(&format!(
        "{}",
        format!("Config file: {}", Config::config_path().display()).dimmed()
    ));

    CommandOutput::new(json_output)
        .with_text(text_output)
        .print(output)
}

/// Print the path of the config file
pub fn cmd_config_path(output: OutputOptions) -> Result<()> {
    let path = Config::config_path();
    let json_output = json!({
        "path": path.to_string_lossy(),
        "exists": path.exists(),
    });
    CommandOutput::new(json_output)
        .with_text(path.display().to_string())
        .print(output)
}
