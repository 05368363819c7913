//! Dashboard API client using the GraphQL endpoint with type-safe cynic queries.
//!
//! # Security Note - Logging
//!
//! The API token is sent through [`RedactedHeader`], whose `Display` and `Debug`
//! impls print `[REDACTED]`, so enabling `RUST_LOG=reqwest=debug` does not leak it.

pub mod graphql;
pub mod lookup;
#[cfg(test)]
pub(crate) mod test_server;

use std::fmt;
use std::time::Duration;

use reqwest::Client;
use reqwest::header;
use secrecy::{ExposeSecret, SecretBox};

use crate::config::Config;
use crate::error::{DashnavError, GraphQlError, Result};
use crate::navigator::{DraftOrderCreated, DraftOrderCreator, MutationError};
use crate::types::OrderSummary;

use graphql::{
    CheckIfOrderExists, CheckIfOrderExistsVariables, DraftOrderCreateInput, ErrorExtensions,
    GraphQlResponse, MutationBuilder, OrderDraftCreate, OrderDraftCreateVariables, QueryBuilder,
};

pub use lookup::GraphQlOrderLookup;

/// Wrapper for sensitive header values that redacts the value when formatted.
struct RedactedHeader {
    value: String,
}

impl RedactedHeader {
    fn bearer(token: &str) -> Self {
        Self {
            value: format!("Bearer {}", token),
        }
    }

    fn as_header_value(&self) -> Result<header::HeaderValue> {
        let mut value = header::HeaderValue::from_str(&self.value)
            .map_err(|_| DashnavError::Auth("API token contains invalid characters".to_string()))?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl fmt::Display for RedactedHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl fmt::Debug for RedactedHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedactedHeader")
            .field("value", &"[REDACTED]")
            .finish()
    }
}

/// Client for the dashboard GraphQL API
pub struct DashboardClient {
    client: Client,
    api_url: String,
    token: Option<SecretBox<String>>,
}

impl DashboardClient {
    /// Create a client from configuration.
    ///
    /// Uses the configured request timeout for the whole request and a
    /// connect timeout of at most 10s.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.api_url(),
            config.token(),
            Duration::from_secs(config.request_timeout),
        )
    }

    pub fn new(api_url: impl Into<String>, token: Option<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout.min(Duration::from_secs(10)))
            .build()?;

        Ok(Self {
            client,
            api_url: api_url.into(),
            token: token.map(|t| SecretBox::new(Box::new(t))),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Execute a GraphQL operation (query or mutation)
    async fn execute<ResponseData, Vars>(
        &self,
        operation: cynic::Operation<ResponseData, Vars>,
    ) -> Result<ResponseData>
    where
        ResponseData: serde::de::DeserializeOwned + 'static,
        Vars: serde::Serialize,
    {
        let mut request = self
            .client
            .post(&self.api_url)
            .header(
                header::CONTENT_TYPE,
                header::HeaderValue::from_static("application/json"),
            )
            .json(&operation);

        if let Some(token) = &self.token {
            let auth_header = RedactedHeader::bearer(token.expose_secret());
            request = request.header(header::AUTHORIZATION, auth_header.as_header_value()?);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DashnavError::Api(format!("HTTP {}", status)));
        }

        let result: GraphQlResponse<ResponseData, ErrorExtensions> = response.json().await?;

        // Handle GraphQL errors - preserve individual error details
        if let Some(errors) = result.errors
            && !errors.is_empty()
        {
            let structured_errors: Vec<GraphQlError> = errors
                .iter()
                .map(|e| GraphQlError {
                    message: e.message.clone(),
                    code: e.extensions.as_ref().and_then(|ext| ext.code.clone()),
                    path: e.path.as_ref().map(|p| {
                        p.iter()
                            .map(|segment| match segment {
                                cynic::GraphQlErrorPathSegment::Field(name) => name.clone(),
                                cynic::GraphQlErrorPathSegment::Index(idx) => idx.to_string(),
                            })
                            .collect::<Vec<_>>()
                            .join(".")
                    }),
                })
                .collect();

            return Err(DashnavError::GraphQlErrors {
                errors: structured_errors,
                partial_data: result.data.is_some(),
            });
        }

        result
            .data
            .ok_or_else(|| DashnavError::Api("No data in dashboard response".to_string()))
    }

    /// Resolve an order by global id; `None` if the server has no such order
    pub async fn check_order_exists(&self, order_id: &str) -> Result<Option<OrderSummary>> {
        let operation = CheckIfOrderExists::build(CheckIfOrderExistsVariables {
            id: cynic::Id::new(order_id),
        });

        let response = self.execute(operation).await?;

        Ok(response.order.map(|order| OrderSummary {
            id: order.id.into_inner(),
            number: order.number,
            status: Some(order.status.to_string()),
        }))
    }
}

impl DraftOrderCreator for DashboardClient {
    async fn create_draft_order(&self) -> Result<DraftOrderCreated> {
        let operation = OrderDraftCreate::build(OrderDraftCreateVariables {
            input: DraftOrderCreateInput::default(),
        });

        let response = self.execute(operation).await?;

        let payload = response.draft_order_create.ok_or_else(|| {
            DashnavError::Api("No payload returned from draftOrderCreate".to_string())
        })?;

        Ok(DraftOrderCreated {
            errors: payload
                .errors
                .into_iter()
                .map(|e| MutationError {
                    field: e.field,
                    code: e.code,
                    message: e.message,
                })
                .collect(),
            order_id: payload.order.map(|o| o.id.into_inner()),
        })
    }
}
