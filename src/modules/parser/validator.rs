//! Configuration validation

use std::collections::HashSet;

use spyglass_core::{Params, SpyglassError};

/// Validator for parsed configuration
pub struct ConfigValidator;

impl ConfigValidator {
    /// Create a new validator
    pub fn new() -> Self {
        Self
    }

    /// Validate a parsed configuration
    pub fn validate(&self, params: &Params) -> Result<(), SpyglassError> {
        if params.devices.is_empty() {
            return Err(SpyglassError::Validation(
                "At least one device must be configured".to_string(),
            ));
        }

        let mut device_names = HashSet::new();
        for device in &params.devices {
            if !device_names.insert(device.name.as_str()) {
                return Err(SpyglassError::Validation(format!(
                    "Duplicate device name: {}",
                    device.name
                )));
            }
        }

        let mut query_kinds = HashSet::new();
        for query in &params.queries {
            if !query_kinds.insert(query.name) {
                return Err(SpyglassError::Validation(format!(
                    "Duplicate query kind: {}",
                    query.name
                )));
            }
        }

        for origin in &params.cors_origins {
            if !origin.starts_with("http://") && !origin.starts_with("https://") {
                return Err(SpyglassError::Validation(format!(
                    "Invalid CORS origin '{}': must include a scheme",
                    origin
                )));
            }
        }

        for (label, uri) in [
            ("docs.uri", &params.docs.uri),
            ("docs.openapi_uri", &params.docs.openapi_uri),
        ] {
            if !uri.starts_with('/') {
                return Err(SpyglassError::Validation(format!(
                    "{} must start with '/': {}",
                    label, uri
                )));
            }
        }

        Ok(())
    }
}

impl Default for ConfigValidator {
    fn default() -> Self {
        Self::new()
    }
}
