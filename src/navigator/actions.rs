//! Quick search actions and their dispatch.
//!
//! Actions are plain data: a label plus an [`ActionCommand`] describing what
//! selecting it does. [`run_action`] executes the command against the injected
//! capabilities (router and draft-order mutation).

use std::future::Future;
use std::sync::Arc;

use serde::Serialize;

use crate::error::{DashnavError, Result};
use crate::routes::order_url;
use crate::types::QuickSearchMode;

/// Category of an action, used for grouping and symbols in the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuickSearchActionType {
    Action,
    View,
    Order,
}

/// What selecting an action does
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionCommand {
    /// Go to a dashboard path
    Navigate(String),
    /// Create a draft order and open it on success
    CreateDraftOrder,
    /// Switch the palette into another mode
    SwitchMode(QuickSearchMode),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickSearchAction {
    pub label: String,
    pub caption: Option<String>,
    pub symbol: Option<String>,
    /// Fuzzy match score against the query (higher is better)
    pub score: i64,
    pub action_type: QuickSearchActionType,
    pub command: ActionCommand,
}

impl QuickSearchAction {
    pub fn new(
        label: impl Into<String>,
        action_type: QuickSearchActionType,
        command: ActionCommand,
    ) -> Self {
        Self {
            label: label.into(),
            caption: None,
            symbol: None,
            score: 0,
            action_type,
            command,
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }
}

/// Router capability
pub trait Navigator: Send + Sync {
    fn navigate(&self, url: &str);
}

/// One entry of a mutation's `errors` list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationError {
    pub field: Option<String>,
    pub code: String,
    pub message: Option<String>,
}

/// Result of the draft-order mutation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftOrderCreated {
    pub errors: Vec<MutationError>,
    pub order_id: Option<String>,
}

/// Draft-order creation capability
pub trait DraftOrderCreator: Send + Sync {
    fn create_draft_order(&self) -> impl Future<Output = Result<DraftOrderCreated>> + Send;
}

impl<T: DraftOrderCreator> DraftOrderCreator for Arc<T> {
    fn create_draft_order(&self) -> impl Future<Output = Result<DraftOrderCreated>> + Send {
        (**self).create_draft_order()
    }
}

/// Capabilities an action may use
pub struct Capabilities<'a, C, N> {
    pub create_order: &'a C,
    pub navigate: &'a N,
}

/// What running an action did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Navigated(String),
    /// The mutation returned errors; nothing was opened
    DraftOrderRejected(Vec<MutationError>),
    /// The caller should switch the controller into this mode
    SwitchMode(QuickSearchMode),
}

/// Completion handler for the draft-order mutation.
///
/// Navigates to the new order only when the mutation reported zero errors.
pub fn on_draft_order_created<N: Navigator>(
    result: DraftOrderCreated,
    navigator: &N,
) -> Result<ActionOutcome> {
    if !result.errors.is_empty() {
        tracing::warn!(
            errors = result.errors.len(),
            "draft order creation returned errors; not navigating"
        );
        return Ok(ActionOutcome::DraftOrderRejected(result.errors));
    }

    let order_id = result
        .order_id
        .ok_or_else(|| DashnavError::Api("No order returned from draftOrderCreate".to_string()))?;
    let url = order_url(&order_id);
    navigator.navigate(&url);
    Ok(ActionOutcome::Navigated(url))
}

/// Execute `action` with the given capabilities
pub async fn run_action<C, N>(
    action: &QuickSearchAction,
    capabilities: &Capabilities<'_, C, N>,
) -> Result<ActionOutcome>
where
    C: DraftOrderCreator,
    N: Navigator,
{
    match &action.command {
        ActionCommand::Navigate(url) => {
            capabilities.navigate.navigate(url);
            Ok(ActionOutcome::Navigated(url.clone()))
        }
        ActionCommand::CreateDraftOrder => {
            let result = capabilities.create_order.create_draft_order().await?;
            on_draft_order_created(result, capabilities.navigate)
        }
        ActionCommand::SwitchMode(mode) => Ok(ActionOutcome::SwitchMode(*mode)),
    }
}
