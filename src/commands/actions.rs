//! `dashnav actions`: list the palette's actions for a mode and query without
//! opening it. Nothing is fetched, so orders mode never shows a "go to" entry.

use serde_json::json;

use super::{CommandOutput, format_action_list};
use crate::cli::OutputOptions;
use crate::config::Config;
use crate::error::Result;
use crate::navigator::get_mode_actions;
use crate::types::{QuickSearchData, QuickSearchMode};

pub fn cmd_actions(mode: QuickSearchMode, query: &str, output: OutputOptions) -> Result<()> {
    let config = Config::load()?;
    let messages = config.message_catalog();

    let actions = get_mode_actions(
        mode,
        query,
        &messages,
        &QuickSearchData::default(),
        config.max_actions,
    );

    let json_output = json!({
        "mode": mode,
        "query": query,
        "actions": actions,
    });

    CommandOutput::new(json_output)
        .with_text(format_action_list(&actions))
        .print(output)
}
