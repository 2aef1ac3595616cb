//! HTTP request handlers for the Spyglass server
//!
//! This module contains handlers for the device listing, supported-query
//! listing, query submission, and documentation endpoints.

mod devices;
mod docs;
mod queries;
mod query;

pub use devices::DevicesHandler;
pub use docs::DocsHandler;
pub use queries::QueriesHandler;
pub use query::QueryHandler;
