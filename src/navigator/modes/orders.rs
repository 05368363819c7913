//! Orders mode: order-number grammar and the go-to / create choice

use std::sync::LazyLock;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use regex::Regex;

use crate::intl::{MessageCatalog, MessageId};
use crate::navigator::actions::{ActionCommand, QuickSearchAction, QuickSearchActionType};
use crate::routes::order_url;
use crate::types::QuickSearchData;

static ORDER_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("order number regex should be valid"));

/// Whether `query` has the shape of an order number (digits only)
pub fn is_query_valid_order_number(query: &str) -> bool {
    ORDER_NUMBER_RE.is_match(query)
}

/// Global GraphQL id of the order with number `order_number`
pub fn get_gql_order_id(order_number: &str) -> String {
    STANDARD.encode(format!("Order:{order_number}"))
}

/// Actions for orders mode.
///
/// Offers "go to order" only when the resolved order belongs to the current
/// query; a missing, failed or stale lookup falls back to "create new order".
pub fn get_orders_mode_actions(
    query: &str,
    messages: &MessageCatalog,
    data: &QuickSearchData,
) -> Vec<QuickSearchAction> {
    if is_query_valid_order_number(query) {
        let gql_id = get_gql_order_id(query);
        if data.order.as_ref().is_some_and(|order| order.id == gql_id) {
            return vec![
                QuickSearchAction::new(
                    messages.format(MessageId::GoToOrder, &[("orderNumber", query)]),
                    QuickSearchActionType::Order,
                    ActionCommand::Navigate(order_url(&gql_id)),
                )
                .with_symbol("#"),
            ];
        }
    }

    vec![QuickSearchAction::new(
        messages.message(MessageId::CreateNewOrder),
        QuickSearchActionType::Action,
        ActionCommand::CreateDraftOrder,
    )]
}
