//! Typed GraphQL operations against the dashboard API.

// Re-export cynic types we need
pub use cynic::{GraphQlResponse, MutationBuilder, QueryBuilder};

// The import MUST be named `schema` for cynic derives to work.
use dashnav_schema::dashboard as schema;

use serde::Deserialize;
use std::fmt;

/// Error extensions sent by the dashboard API
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorExtensions {
    pub code: Option<String>,
}

// Query Variables

/// Variables for the order existence check
#[derive(cynic::QueryVariables, Debug)]
pub struct CheckIfOrderExistsVariables {
    pub id: cynic::Id,
}

/// Variables for creating a draft order
#[derive(cynic::QueryVariables, Debug)]
pub struct OrderDraftCreateVariables {
    pub input: DraftOrderCreateInput,
}

// Input Objects

/// Input for creating a draft order; every field is optional
#[derive(cynic::InputObject, Debug, Clone, Default)]
#[cynic(rename_all = "camelCase")]
pub struct DraftOrderCreateInput {
    pub customer_note: Option<String>,
    pub channel_id: Option<cynic::Id>,
}

// Enums

#[derive(cynic::Enum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Draft,
    Unconfirmed,
    Unfulfilled,
    PartiallyFulfilled,
    Fulfilled,
    Canceled,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OrderStatus::Draft => "draft",
            OrderStatus::Unconfirmed => "unconfirmed",
            OrderStatus::Unfulfilled => "unfulfilled",
            OrderStatus::PartiallyFulfilled => "partially fulfilled",
            OrderStatus::Fulfilled => "fulfilled",
            OrderStatus::Canceled => "canceled",
        };
        write!(f, "{}", name)
    }
}

// Query Fragments - CheckIfOrderExists

/// `query CheckIfOrderExists($id: ID!) { order(id: $id) { id number status } }`
#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Query", variables = "CheckIfOrderExistsVariables")]
pub struct CheckIfOrderExists {
    #[arguments(id: $id)]
    pub order: Option<Order>,
}

#[derive(cynic::QueryFragment, Debug)]
pub struct Order {
    pub id: cynic::Id,
    pub number: Option<String>,
    pub status: OrderStatus,
}

// Mutation Fragments - OrderDraftCreate

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Mutation", variables = "OrderDraftCreateVariables")]
pub struct OrderDraftCreate {
    #[arguments(input: $input)]
    pub draft_order_create: Option<DraftOrderCreatePayload>,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "DraftOrderCreate")]
pub struct DraftOrderCreatePayload {
    pub errors: Vec<OrderError>,
    pub order: Option<CreatedOrder>,
}

#[derive(cynic::QueryFragment, Debug)]
pub struct OrderError {
    pub field: Option<String>,
    pub code: String,
    pub message: Option<String>,
}

/// Order fragment for the created draft (id only)
#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Order")]
pub struct CreatedOrder {
    pub id: cynic::Id,
}
