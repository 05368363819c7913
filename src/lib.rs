pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod intl;
pub mod logging;
pub mod navigator;
pub mod paths;
pub mod routes;
pub mod types;

#[cfg(test)]
pub(crate) mod test_guards;

pub use config::Config;
pub use error::{DashnavError, GraphQlError, Result};
pub use intl::{MessageCatalog, MessageId};
pub use navigator::{
    ActionCommand, ActionOutcome, QuickSearchAction, QuickSearchActionType, QuickSearchController,
};
pub use types::{DASHNAV_DIR, OrderSummary, QuickSearchData, QuickSearchMode, VALID_MODES};
