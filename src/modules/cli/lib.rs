//! Spyglass CLI
//!
//! This crate provides the command-line interface for Spyglass including:
//! - run: Start the looking glass server
//! - schema: Print the generated OpenAPI schema document

pub mod commands;

pub use commands::{Cli, Commands};
