//! Order lookup backed by the dashboard API.
//!
//! Each request runs on its own tokio task; results come back over an
//! unbounded channel the palette drains into the controller. Nothing is
//! cancelled: superseded results are dropped by the controller's sequence check.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::error::{DashnavError, Result};
use crate::navigator::{LookupRequest, LookupResponse, OrderLookup};

use super::DashboardClient;

pub struct GraphQlOrderLookup {
    client: Arc<DashboardClient>,
    responses: mpsc::UnboundedSender<LookupResponse>,
    runtime: Handle,
}

impl GraphQlOrderLookup {
    /// Create the lookup and the receiver its results arrive on.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(
        client: Arc<DashboardClient>,
    ) -> Result<(Self, mpsc::UnboundedReceiver<LookupResponse>)> {
        let runtime = Handle::try_current()
            .map_err(|e| DashnavError::Other(format!("order lookup needs a tokio runtime: {e}")))?;
        let (tx, rx) = mpsc::unbounded_channel();

        Ok((
            Self {
                client,
                responses: tx,
                runtime,
            },
            rx,
        ))
    }
}

impl OrderLookup for GraphQlOrderLookup {
    fn get_order_data(&self, request: LookupRequest) {
        let client = Arc::clone(&self.client);
        let responses = self.responses.clone();

        self.runtime.spawn(async move {
            match client.check_order_exists(&request.order_id).await {
                Ok(order) => {
                    let response = LookupResponse {
                        seq: request.seq,
                        order,
                    };
                    if responses.send(response).is_err() {
                        tracing::debug!(seq = request.seq, "lookup receiver dropped");
                    }
                }
                Err(e) => {
                    tracing::warn!("Order lookup for {} failed: {e}", request.order_id);
                }
            }
        });
    }
}
