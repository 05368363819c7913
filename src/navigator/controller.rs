//! Quick search state machine.
//!
//! The controller owns the field text and the active mode. Input changes are
//! interpreted against the prefix grammar, orders mode issues order lookups,
//! and the action list is derived on demand from the current state.

use std::sync::Arc;

use crate::intl::MessageCatalog;
use crate::types::{QuickSearchData, QuickSearchMode};

use super::actions::QuickSearchAction;
use super::listener::{BackspaceListener, InputHandle, KeyCode};
use super::lookup::{LookupResponse, LookupTracker, OrderLookup};
use super::modes::{get_gql_order_id, get_mode_actions, is_query_valid_order_number};
use super::prefix::match_mode_prefix;

pub struct QuickSearchController<L> {
    query: String,
    mode: QuickSearchMode,
    open: bool,
    lookup: L,
    tracker: LookupTracker,
    input: Option<Arc<dyn InputHandle>>,
    /// Present only while a sub-mode is active and the dialog is open
    back_listener: Option<BackspaceListener>,
}

impl<L: OrderLookup> QuickSearchController<L> {
    /// Controller for a closed dialog in default mode
    pub fn new(lookup: L) -> Self {
        Self {
            query: String::new(),
            mode: QuickSearchMode::Default,
            open: false,
            lookup,
            tracker: LookupTracker::default(),
            input: None,
            back_listener: None,
        }
    }

    /// Bind the input the backspace listener attaches to
    pub fn with_input(mut self, input: Arc<dyn InputHandle>) -> Self {
        self.input = Some(input);
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn mode(&self) -> QuickSearchMode {
        self.mode
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_listening_for_backspace(&self) -> bool {
        self.back_listener.is_some()
    }

    /// Externally fetched data as of the latest accepted lookup
    pub fn data(&self) -> QuickSearchData {
        QuickSearchData {
            order: self.tracker.result().cloned(),
        }
    }

    /// Dialog lifecycle. Only real open/close transitions have an effect.
    pub fn set_open(&mut self, open: bool) {
        if open == self.open {
            return;
        }
        self.open = open;

        if !open {
            tracing::debug!(mode = %self.mode, "quick search closed");
            self.mode = QuickSearchMode::Default;
            self.query.clear();
            self.tracker.reset();
        }
        self.apply_mode_effect();
    }

    /// Switch mode. Sub-modes are only entered from default mode; switching
    /// straight from one sub-mode to another is refused, as is any switch
    /// while the dialog is closed.
    ///
    /// Returns whether the mode changed.
    pub fn set_mode(&mut self, mode: QuickSearchMode) -> bool {
        if !self.open || mode == self.mode {
            return false;
        }
        if !self.mode.is_default() && !mode.is_default() {
            tracing::debug!(from = %self.mode, to = %mode, "refusing sub-mode to sub-mode switch");
            return false;
        }

        tracing::debug!(from = %self.mode, to = %mode, "quick search mode changed");
        self.mode = mode;
        self.apply_mode_effect();
        true
    }

    /// Runs after every mode change and dialog open/close: clears the query
    /// and re-arms the backspace listener for the new state.
    fn apply_mode_effect(&mut self) {
        self.query.clear();

        // Release the previous listener before a new one can be attached
        self.back_listener = None;
        if self.open
            && !self.mode.is_default()
            && let Some(input) = &self.input
        {
            self.back_listener = Some(BackspaceListener::arm(Arc::clone(input)));
        }
    }

    /// Handle a change of the field's raw text. Ignored while closed.
    pub fn change(&mut self, value: &str) {
        if !self.open {
            tracing::debug!("ignoring input while quick search is closed");
            return;
        }
        if self.mode.is_default() {
            match match_mode_prefix(value) {
                Some(mode) => {
                    self.set_mode(mode);
                }
                None => self.query = value.to_string(),
            }
            return;
        }

        if self.mode == QuickSearchMode::Orders && is_query_valid_order_number(value) {
            let request = self.tracker.issue(get_gql_order_id(value));
            tracing::debug!(seq = request.seq, order_id = %request.order_id, "looking up order");
            self.lookup.get_order_data(request);
        }
        self.query = value.to_string();
    }

    /// Key released in the input while it holds `field_value`.
    ///
    /// Returns whether the key left the current sub-mode.
    pub fn key_up(&mut self, key: KeyCode, field_value: &str) -> bool {
        let exit = self.open
            && self
                .back_listener
                .as_ref()
                .is_some_and(|listener| listener.should_exit(key, field_value));
        if exit {
            self.set_mode(QuickSearchMode::Default);
        }
        exit
    }

    /// Deliver a lookup result; superseded results are ignored.
    ///
    /// Returns whether the result was accepted.
    pub fn resolve_lookup(&mut self, response: LookupResponse) -> bool {
        self.tracker.accept(response)
    }

    /// Actions available for the current state
    pub fn actions(&self, messages: &MessageCatalog, max_actions: usize) -> Vec<QuickSearchAction> {
        get_mode_actions(self.mode, &self.query, messages, &self.data(), max_actions)
    }
}
