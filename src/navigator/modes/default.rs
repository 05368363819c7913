//! Default mode: views and commands matched against the query

use crate::intl::{MessageCatalog, MessageId};
use crate::navigator::actions::{ActionCommand, QuickSearchAction, QuickSearchActionType};
use crate::navigator::prefix::MODE_PREFIXES;
use crate::navigator::score::sort_by_score;

use super::commands::get_commands;
use super::views::get_views;

/// One hint per registered prefix, advertising how to enter each sub-mode
fn get_mode_hints(messages: &MessageCatalog) -> Vec<QuickSearchAction> {
    MODE_PREFIXES
        .iter()
        .map(|prefix| {
            QuickSearchAction::new(
                messages.message(prefix.hint),
                QuickSearchActionType::Action,
                ActionCommand::SwitchMode(prefix.mode),
            )
            .with_caption(messages.format(
                MessageId::ModeHintCaption,
                &[("prefix", prefix.prefix.trim_end())],
            ))
            .with_symbol(prefix.prefix.trim_end())
        })
        .collect()
}

pub fn get_default_mode_actions(
    query: &str,
    messages: &MessageCatalog,
    max_actions: usize,
) -> Vec<QuickSearchAction> {
    if query.trim().is_empty() {
        return get_mode_hints(messages);
    }

    let mut actions = get_views(query, messages);
    actions.extend(get_commands(query, messages));
    sort_by_score(&mut actions);
    actions.truncate(max_actions);
    actions
}
