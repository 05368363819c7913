//! Order-existence lookup contract and result sequencing.
//!
//! Lookups are issued per keystroke and may complete out of order. Every
//! request carries a sequence number from [`LookupTracker`]; only the response
//! to the most recently issued request is accepted.

use std::sync::Arc;

use crate::types::OrderSummary;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub seq: u64,
    /// Global id of the order to resolve
    pub order_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResponse {
    pub seq: u64,
    /// `None` when the server has no such order
    pub order: Option<OrderSummary>,
}

/// Resolves whether an order exists.
///
/// Fire-and-forget: implementations start the fetch and return immediately.
/// The result is handed back to the controller via
/// [`QuickSearchController::resolve_lookup`](super::QuickSearchController::resolve_lookup).
/// Failed lookups produce no response.
pub trait OrderLookup {
    fn get_order_data(&self, request: LookupRequest);
}

impl<T: OrderLookup + ?Sized> OrderLookup for Arc<T> {
    fn get_order_data(&self, request: LookupRequest) {
        (**self).get_order_data(request)
    }
}

impl<T: OrderLookup + ?Sized> OrderLookup for &T {
    fn get_order_data(&self, request: LookupRequest) {
        (**self).get_order_data(request)
    }
}

/// Lookup that never resolves anything, for offline use
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLookup;

impl OrderLookup for NoLookup {
    fn get_order_data(&self, _request: LookupRequest) {}
}

/// Sequence bookkeeping for lookups issued by one controller
#[derive(Debug, Default)]
pub struct LookupTracker {
    issued: u64,
    latest: Option<u64>,
    result: Option<OrderSummary>,
}

impl LookupTracker {
    /// Allocate the next request; it supersedes every earlier one
    pub fn issue(&mut self, order_id: String) -> LookupRequest {
        self.issued += 1;
        self.latest = Some(self.issued);
        LookupRequest {
            seq: self.issued,
            order_id,
        }
    }

    /// Store `response` if it answers the latest request.
    ///
    /// Returns whether the response was accepted.
    pub fn accept(&mut self, response: LookupResponse) -> bool {
        if self.latest != Some(response.seq) {
            tracing::debug!(
                seq = response.seq,
                latest = ?self.latest,
                "discarding superseded order lookup"
            );
            return false;
        }
        self.result = response.order;
        true
    }

    pub fn result(&self) -> Option<&OrderSummary> {
        self.result.as_ref()
    }

    /// Forget the current result and invalidate in-flight requests.
    ///
    /// The counter keeps increasing so late responses can never match a
    /// request issued after the reset.
    pub fn reset(&mut self) {
        self.latest = None;
        self.result = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: &str) -> OrderSummary {
        OrderSummary {
            id: id.to_string(),
            number: None,
            status: None,
        }
    }

    #[test]
    fn test_sequence_numbers_increase() {
        let mut tracker = LookupTracker::default();
        let first = tracker.issue("a".to_string());
        let second = tracker.issue("b".to_string());
        assert!(second.seq > first.seq);
        assert_eq!(second.order_id, "b");
    }

    #[test]
    fn test_latest_response_accepted() {
        let mut tracker = LookupTracker::default();
        let request = tracker.issue("a".to_string());

        assert!(tracker.accept(LookupResponse {
            seq: request.seq,
            order: Some(order("a")),
        }));
        assert_eq!(tracker.result().map(|o| o.id.as_str()), Some("a"));
    }

    #[test]
    fn test_out_of_order_response_discarded() {
        let mut tracker = LookupTracker::default();
        let stale = tracker.issue("a".to_string());
        let fresh = tracker.issue("b".to_string());

        assert!(tracker.accept(LookupResponse {
            seq: fresh.seq,
            order: Some(order("b")),
        }));
        assert!(!tracker.accept(LookupResponse {
            seq: stale.seq,
            order: Some(order("a")),
        }));
        assert_eq!(tracker.result().map(|o| o.id.as_str()), Some("b"));
    }

    #[test]
    fn test_not_found_clears_result() {
        let mut tracker = LookupTracker::default();
        let first = tracker.issue("a".to_string());
        tracker.accept(LookupResponse {
            seq: first.seq,
            order: Some(order("a")),
        });

        let second = tracker.issue("b".to_string());
        tracker.accept(LookupResponse {
            seq: second.seq,
            order: None,
        });
        assert!(tracker.result().is_none());
    }

    #[test]
    fn test_reset_invalidates_in_flight() {
        let mut tracker = LookupTracker::default();
        let request = tracker.issue("a".to_string());
        tracker.reset();

        assert!(!tracker.accept(LookupResponse {
            seq: request.seq,
            order: Some(order("a")),
        }));
        assert!(tracker.result().is_none());
        assert!(tracker.issue("b".to_string()).seq > request.seq);
    }
}
