//! Type definitions for Spyglass
//!
//! This crate contains shared type definitions used across the Spyglass codebase,
//! including the supported query kinds and the HTTP request/response types.

pub mod query;
pub mod runtime;

pub use query::QueryKind;
pub use runtime::{
    DeviceResponse, ErrorEnvelope, QueryRequest, QueryResponse, SupportedQueryResponse,
};
