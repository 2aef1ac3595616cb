//! Runtime server for Spyglass
//!
//! This crate provides the HTTP server for the looking glass: route
//! assembly, request handlers, the error-handling pipeline, CORS policy,
//! schema generation, and static content mounts.

pub mod cors;
pub mod errors;
pub mod handlers;
pub mod openapi;
pub mod server;
pub mod state;

pub use errors::ApiError;
pub use handlers::{DevicesHandler, DocsHandler, QueriesHandler, QueryHandler};
pub use openapi::{RouteDescriptor, SchemaGenerator};
pub use server::{Server, ServerBuilder};
pub use state::AppState;
