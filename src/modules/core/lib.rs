//! Core domain logic for Spyglass
//!
//! This crate contains the core domain models, configuration types, error
//! types, and the query-engine contract for the Spyglass looking glass.

pub mod domain;
pub mod engine;
pub mod error;

pub use domain::*;
pub use engine::{EngineError, QueryEngine, UnconfiguredEngine};
pub use error::SpyglassError;
