//! Static command registry

use crate::intl::{MessageCatalog, MessageId};
use crate::navigator::actions::{ActionCommand, QuickSearchAction, QuickSearchActionType};
use crate::navigator::score::{filter_actions, sort_by_score};
use crate::routes;

/// What a registered command does when selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandTarget {
    /// Open a creation page
    Page(&'static str),
    /// Run the draft-order mutation
    DraftOrder,
}

pub const COMMANDS: &[(MessageId, CommandTarget)] = &[
    (
        MessageId::CreateCategory,
        CommandTarget::Page(routes::CATEGORY_ADD_PATH),
    ),
    (
        MessageId::CreateCollection,
        CommandTarget::Page(routes::COLLECTION_ADD_PATH),
    ),
    (
        MessageId::CreateCustomer,
        CommandTarget::Page(routes::CUSTOMER_ADD_PATH),
    ),
    (MessageId::CreateOrder, CommandTarget::DraftOrder),
    (
        MessageId::CreateProduct,
        CommandTarget::Page(routes::PRODUCT_ADD_PATH),
    ),
    (MessageId::CreateSale, CommandTarget::Page(routes::SALE_ADD_PATH)),
    (
        MessageId::CreateVoucher,
        CommandTarget::Page(routes::VOUCHER_ADD_PATH),
    ),
];

/// Commands whose label matches `query`, in registry order
pub fn get_commands(query: &str, messages: &MessageCatalog) -> Vec<QuickSearchAction> {
    let commands = COMMANDS
        .iter()
        .map(|(label, target)| {
            let command = match target {
                CommandTarget::Page(path) => ActionCommand::Navigate((*path).to_string()),
                CommandTarget::DraftOrder => ActionCommand::CreateDraftOrder,
            };
            QuickSearchAction::new(messages.message(*label), QuickSearchActionType::Action, command)
        })
        .collect();

    filter_actions(commands, query)
}

/// Actions for commands mode.
///
/// All commands in registry order for an empty query, otherwise the matching
/// ones best first.
pub fn get_commands_mode_actions(query: &str, messages: &MessageCatalog) -> Vec<QuickSearchAction> {
    let mut actions = get_commands(query, messages);
    if !query.trim().is_empty() {
        sort_by_score(&mut actions);
    }
    actions
}
