//! Quick search command palette.
//!
//! - [`controller`]: the mode state machine driven by input changes
//! - [`prefix`]: exact-match prefixes that enter a sub-mode
//! - [`listener`]: backspace-to-exit guard bound to the input
//! - [`lookup`]: order lookup contract and result sequencing
//! - [`modes`]: pure derivation of the available actions per mode
//! - [`actions`]: action types and dispatch against injected capabilities

pub mod actions;
pub mod controller;
pub mod listener;
pub mod lookup;
pub mod modes;
pub mod prefix;
pub mod score;

pub use actions::{
    ActionCommand, ActionOutcome, Capabilities, DraftOrderCreated, DraftOrderCreator,
    MutationError, Navigator, QuickSearchAction, QuickSearchActionType, on_draft_order_created,
    run_action,
};
pub use controller::QuickSearchController;
pub use listener::{BackspaceListener, InputHandle, KeyCode, ListenerId};
pub use lookup::{LookupRequest, LookupResponse, LookupTracker, NoLookup, OrderLookup};
pub use modes::{get_gql_order_id, get_mode_actions, is_query_valid_order_number};
pub use prefix::{MODE_PREFIXES, ModePrefix, match_mode_prefix};
