//! YAML configuration parser

use spyglass_core::{Params, SpyglassError};

use crate::env::EnvSubstitutor;

/// YAML parser for Spyglass configuration files
pub struct YamlParser;

impl YamlParser {
    /// Parse a YAML string into Params
    pub fn parse(content: &str) -> Result<Params, SpyglassError> {
        // Substitute environment variables before deserializing
        let substitutor = EnvSubstitutor::new();
        let substituted = substitutor.substitute(content)?;

        serde_yaml::from_str::<Params>(&substituted)
            .map_err(|e| SpyglassError::Config(format!("Invalid configuration: {}", e)))
    }
}
