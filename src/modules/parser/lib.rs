//! Configuration parsing for Spyglass
//!
//! This crate handles parsing of YAML configuration files, validation,
//! and environment variable substitution.

pub mod env;
pub mod validator;
pub mod yaml;

pub use validator::ConfigValidator;
pub use yaml::YamlParser;

use spyglass_core::{Params, SpyglassError};

/// Parse a configuration file from a path
pub fn parse_file(path: &str) -> Result<Params, SpyglassError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| SpyglassError::Config(format!("Failed to read file '{}': {}", path, e)))?;

    parse_string(&content)
}

/// Parse a configuration from a string
pub fn parse_string(content: &str) -> Result<Params, SpyglassError> {
    // Parse YAML
    let params = YamlParser::parse(content)?;

    // Validate configuration
    let validator = ConfigValidator::new();
    validator.validate(&params)?;

    Ok(params)
}
