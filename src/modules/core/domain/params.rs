//! Root configuration model

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use spyglass_types::QueryKind;

use super::{Device, QueryTypeConfig};

/// Root configuration model for a Spyglass deployment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Params {
    /// Site title shown in the UI and documentation
    #[serde(default = "default_site_title")]
    pub site_title: String,

    /// Site description shown in the documentation
    #[serde(default)]
    pub site_description: String,

    /// Address the HTTP listener binds to (default: 0.0.0.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listen_address: Option<String>,

    /// Port the HTTP listener binds to (default: 8001)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listen_port: Option<u16>,

    /// Enable verbose request logging
    #[serde(default)]
    pub debug: bool,

    /// Developer mode: allows the fixed development origin for CORS
    #[serde(default)]
    pub developer_mode: bool,

    /// Origins allowed to make cross-origin requests
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Per-request timeout in seconds (default: 30)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout: Option<u64>,

    /// API documentation configuration
    #[serde(default)]
    pub docs: DocsConfig,

    /// Web asset configuration
    #[serde(default)]
    pub web: WebConfig,

    /// Static content directories
    #[serde(default)]
    pub paths: PathsConfig,

    /// Backend devices available to query
    #[serde(default)]
    pub devices: Vec<Device>,

    /// Supported query kinds; empty means all kinds enabled
    #[serde(default)]
    pub queries: Vec<QueryTypeConfig>,
}

fn default_site_title() -> String {
    "Spyglass".to_string()
}

impl Params {
    /// Find a device by name
    pub fn find_device(&self, name: &str) -> Option<&Device> {
        self.devices.iter().find(|d| d.name == name)
    }

    /// Listen address, defaulting to all interfaces
    pub fn listen_address(&self) -> &str {
        self.listen_address.as_deref().unwrap_or("0.0.0.0")
    }

    /// Listen port, defaulting to 8001
    pub fn listen_port(&self) -> u16 {
        self.listen_port.unwrap_or(8001)
    }

    /// Per-request timeout
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout.unwrap_or(30))
    }

    /// Configured query kinds, defaulting to every kind enabled
    pub fn query_types(&self) -> Vec<QueryTypeConfig> {
        if self.queries.is_empty() {
            QueryKind::ALL.into_iter().map(QueryTypeConfig::new).collect()
        } else {
            self.queries.clone()
        }
    }

    /// Whether the given query kind is enabled for this deployment
    pub fn query_enabled(&self, kind: QueryKind) -> bool {
        self.query_types()
            .iter()
            .any(|q| q.name == kind && q.enable)
    }
}

impl Default for Params {
    fn default() -> Self {
        Self {
            site_title: default_site_title(),
            site_description: String::new(),
            listen_address: None,
            listen_port: None,
            debug: false,
            developer_mode: false,
            cors_origins: Vec::new(),
            request_timeout: None,
            docs: DocsConfig::default(),
            web: WebConfig::default(),
            paths: PathsConfig::default(),
            devices: Vec::new(),
            queries: Vec::new(),
        }
    }
}

/// Interactive documentation renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocsMode {
    /// ReDoc single-page renderer
    Redoc,
    /// Swagger UI renderer
    Swagger,
}

/// API documentation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocsConfig {
    /// Whether the documentation routes are registered at all
    #[serde(default = "default_docs_enable")]
    pub enable: bool,

    /// Which renderer serves the interactive page
    #[serde(default = "default_docs_mode")]
    pub mode: DocsMode,

    /// URI of the interactive documentation page
    #[serde(default = "default_docs_uri")]
    pub uri: String,

    /// URI of the machine-readable schema document
    #[serde(default = "default_openapi_uri")]
    pub openapi_uri: String,

    /// Public base URL substituted into code samples
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Documentation title; `{site_title}` is replaced with the site title
    #[serde(default = "default_docs_title")]
    pub title: String,

    /// Documentation description
    #[serde(default)]
    pub description: String,

    /// Directory holding per-endpoint code sample templates
    #[serde(default = "default_samples_dir")]
    pub samples_dir: PathBuf,
}

fn default_docs_enable() -> bool {
    true
}

fn default_docs_mode() -> DocsMode {
    DocsMode::Redoc
}

fn default_docs_uri() -> String {
    "/api/docs".to_string()
}

fn default_openapi_uri() -> String {
    "/openapi.json".to_string()
}

fn default_base_url() -> String {
    "http://localhost:8001".to_string()
}

fn default_docs_title() -> String {
    "{site_title} API Documentation".to_string()
}

fn default_samples_dir() -> PathBuf {
    PathBuf::from("assets/examples")
}

impl DocsConfig {
    /// Documentation title with the `{site_title}` placeholder applied
    pub fn title_for(&self, site_title: &str) -> String {
        self.title.replace("{site_title}", site_title)
    }
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            enable: default_docs_enable(),
            mode: default_docs_mode(),
            uri: default_docs_uri(),
            openapi_uri: default_openapi_uri(),
            base_url: default_base_url(),
            title: default_docs_title(),
            description: String::new(),
            samples_dir: default_samples_dir(),
        }
    }
}

/// Web asset configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    /// Logo asset referenced by the schema document
    #[serde(default = "default_logo")]
    pub logo: String,
}

fn default_logo() -> String {
    "/images/spyglass-logo.svg".to_string()
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            logo: default_logo(),
        }
    }
}

/// Static content directories
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory mounted at /images
    #[serde(default = "default_images_dir")]
    pub images_dir: PathBuf,

    /// UI bundle directory mounted at /
    #[serde(default = "default_ui_dir")]
    pub ui_dir: PathBuf,
}

fn default_images_dir() -> PathBuf {
    PathBuf::from("static/images")
}

fn default_ui_dir() -> PathBuf {
    PathBuf::from("static/ui")
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            images_dir: default_images_dir(),
            ui_dir: default_ui_dir(),
        }
    }
}
