//! Mode-action registry.
//!
//! [`get_mode_actions`] is a pure projection of `(mode, query, data)` onto the
//! list of actions the palette offers. It holds no state and is cheap enough
//! to call on every render.

pub mod commands;
pub mod default;
pub mod orders;
pub mod views;

pub use commands::{COMMANDS, CommandTarget, get_commands, get_commands_mode_actions};
pub use default::get_default_mode_actions;
pub use orders::{get_gql_order_id, get_orders_mode_actions, is_query_valid_order_number};
pub use views::{VIEWS, get_views};

use crate::intl::MessageCatalog;
use crate::types::{QuickSearchData, QuickSearchMode};

use super::actions::QuickSearchAction;

pub fn get_mode_actions(
    mode: QuickSearchMode,
    query: &str,
    messages: &MessageCatalog,
    data: &QuickSearchData,
    max_actions: usize,
) -> Vec<QuickSearchAction> {
    match mode {
        QuickSearchMode::Default => get_default_mode_actions(query, messages, max_actions),
        QuickSearchMode::Commands => get_commands_mode_actions(query, messages),
        QuickSearchMode::Orders => get_orders_mode_actions(query, messages, data),
    }
}
