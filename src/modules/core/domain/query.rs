//! Supported query type configuration

use serde::{Deserialize, Serialize};

use spyglass_types::{QueryKind, SupportedQueryResponse};

/// Per-deployment configuration for one query kind
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryTypeConfig {
    /// The query kind this entry configures
    pub name: QueryKind,

    /// Human-readable label override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Whether this deployment accepts the query kind (default: true)
    #[serde(default = "default_enable")]
    pub enable: bool,
}

fn default_enable() -> bool {
    true
}

impl QueryTypeConfig {
    /// Create an enabled entry for the given kind
    pub fn new(name: QueryKind) -> Self {
        Self {
            name,
            display_name: None,
            enable: true,
        }
    }

    /// Disable this query kind
    pub fn disabled(mut self) -> Self {
        self.enable = false;
        self
    }

    /// Human-readable label, falling back to the kind's default
    pub fn display_name(&self) -> &str {
        self.display_name
            .as_deref()
            .unwrap_or_else(|| self.name.display_name())
    }

    /// Convert to the wire shape served by the supported-queries endpoint
    pub fn to_response(&self) -> SupportedQueryResponse {
        SupportedQueryResponse {
            name: self.name,
            display_name: self.display_name().to_string(),
            enable: self.enable,
        }
    }
}
