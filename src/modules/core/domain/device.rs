//! Backend device definitions

use serde::{Deserialize, Serialize};

use spyglass_types::DeviceResponse;

/// One backend device the looking glass can query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    /// Unique device name, referenced by `query_location`
    pub name: String,

    /// Network or site the device belongs to
    pub network: String,

    /// Human-readable device label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl Device {
    /// Create a new device with the given name and network
    pub fn new(name: impl Into<String>, network: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            network: network.into(),
            display_name: None,
        }
    }

    /// Set the display name for this device
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Human-readable label, falling back to the device name
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }

    /// Convert to the wire shape served by the device listing endpoint
    pub fn to_response(&self) -> DeviceResponse {
        DeviceResponse {
            name: self.name.clone(),
            network: self.network.clone(),
            display_name: self.display_name().to_string(),
        }
    }
}
