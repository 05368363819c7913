//! GraphQL schema definitions for dashnav.
//!
//! Generated schema types for the dashboard API live in their own crate so the
//! derive-heavy codegen is not rebuilt on every change to the palette.

// Generated code
#![allow(clippy::all)]
#![allow(clippy::pedantic)]
#![allow(clippy::nursery)]

/// Dashboard GraphQL schema types used by the order lookup and draft-order
/// mutation.
#[cynic::schema("dashboard")]
pub mod dashboard {}
