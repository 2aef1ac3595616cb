//! Schema document generation
//!
//! Builds the OpenAPI 3.0 description of the live route table, enriched
//! with the vendor extensions the documentation UI consumes: a logo
//! reference and per-endpoint code samples loaded from on-disk templates.
//!
//! The generator runs exactly once, during application assembly. A missing
//! template is a fatal startup condition, never a per-request error.

use serde_json::{json, Map, Value};
use std::sync::Arc;

use spyglass_core::{Params, SpyglassError};

/// Languages each functional endpoint ships samples for:
/// (label, template file extension)
const SAMPLE_LANGUAGES: [(&str, &str); 2] = [("cURL", "sh"), ("Python", "py")];

/// Placeholder replaced with `docs.base_url` in every sample template
const BASE_URL_PLACEHOLDER: &str = "{base_url}";

/// One registered route, as the schema generator sees it
///
/// The table is produced by the assembly and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct RouteDescriptor {
    /// Route path as registered
    pub path: &'static str,
    /// Lowercase HTTP method
    pub method: &'static str,
    /// Short human-readable summary
    pub summary: &'static str,
    /// Longer description for the documentation page
    pub description: &'static str,
    /// Documentation tag grouping this route
    pub tag: &'static str,
    /// Stem of this route's sample template files (`<stem>.sh`, `<stem>.py`)
    pub sample_stem: &'static str,
}

/// The three functional routes, in documentation order
pub fn route_table() -> Vec<RouteDescriptor> {
    vec![
        RouteDescriptor {
            path: "/api/devices",
            method: "get",
            summary: "List devices",
            description: "Returns every backend device queries can run against.",
            tag: "Devices",
            sample_stem: "devices",
        },
        RouteDescriptor {
            path: "/api/queries",
            method: "get",
            summary: "List supported queries",
            description: "Returns the query kinds this deployment supports.",
            tag: "Queries",
            sample_stem: "queries",
        },
        RouteDescriptor {
            path: "/api/query/",
            method: "post",
            summary: "Submit a query",
            description: "Runs a query against a device and returns its output.",
            tag: "Queries",
            sample_stem: "query",
        },
    ]
}

/// Schema document generator
///
/// `build()` is explicit and fallible; assembly calls it once and caches
/// the result for the process lifetime.
pub struct SchemaGenerator {
    params: Arc<Params>,
}

impl SchemaGenerator {
    /// Create a generator for the given configuration
    pub fn new(params: Arc<Params>) -> Self {
        Self { params }
    }

    /// Build the complete schema document
    pub fn build(&self) -> Result<Value, SpyglassError> {
        let mut schema = self.base_schema();

        // Vendor logo extension for the documentation UI
        schema["info"]["x-logo"] = json!({ "url": self.params.web.logo });

        // Attach per-endpoint code samples
        for route in route_table() {
            let samples = self.load_samples(route.sample_stem)?;
            schema["paths"][route.path][route.method]["x-code-samples"] = Value::Array(samples);
        }

        Ok(schema)
    }

    /// Base OpenAPI 3.0 document from the route table and metadata
    fn base_schema(&self) -> Value {
        let docs = &self.params.docs;
        let mut paths = Map::new();

        for route in route_table() {
            let mut operation = json!({
                "summary": route.summary,
                "description": route.description,
                "operationId": route.sample_stem,
                "tags": [route.tag],
                "responses": self.responses_for(&route),
            });

            if route.method == "post" {
                operation["requestBody"] = json!({
                    "required": true,
                    "content": {
                        "application/json": {
                            "schema": { "$ref": "#/components/schemas/QueryRequest" }
                        }
                    }
                });
            }

            let entry = paths
                .entry(route.path.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            entry[route.method] = operation;
        }

        json!({
            "openapi": "3.0.3",
            "info": {
                "title": docs.title_for(&self.params.site_title),
                "version": env!("CARGO_PKG_VERSION"),
                "description": docs.description,
            },
            "servers": [
                { "url": docs.base_url }
            ],
            "paths": paths,
            "components": {
                "schemas": Self::component_schemas(),
            },
            "tags": [
                { "name": "Devices", "description": "Backend device inventory" },
                { "name": "Queries", "description": "Query submission and discovery" }
            ]
        })
    }

    /// Status-code table for one route
    fn responses_for(&self, route: &RouteDescriptor) -> Value {
        let error = json!({
            "description": "Error",
            "content": {
                "application/json": {
                    "schema": { "$ref": "#/components/schemas/QueryError" }
                }
            }
        });

        let success_ref = match route.sample_stem {
            "devices" => json!({
                "type": "array",
                "items": { "$ref": "#/components/schemas/DeviceResponse" }
            }),
            "queries" => json!({
                "type": "array",
                "items": { "$ref": "#/components/schemas/SupportedQueryResponse" }
            }),
            _ => json!({ "$ref": "#/components/schemas/QueryResponse" }),
        };

        let mut responses = Map::new();
        responses.insert(
            "200".to_string(),
            json!({
                "description": "Successful response",
                "content": { "application/json": { "schema": success_ref } }
            }),
        );
        if route.method == "post" {
            responses.insert("400".to_string(), error.clone());
            responses.insert("422".to_string(), error.clone());
        }
        responses.insert("500".to_string(), error);

        Value::Object(responses)
    }

    fn component_schemas() -> Value {
        json!({
            "QueryRequest": {
                "type": "object",
                "properties": {
                    "query_location": { "type": "string" },
                    "query_type": {
                        "type": "string",
                        "enum": ["bgp_route", "bgp_community", "bgp_aspath", "ping", "traceroute"]
                    },
                    "query_target": { "type": "string" }
                },
                "required": ["query_location", "query_type", "query_target"]
            },
            "QueryResponse": {
                "type": "object",
                "properties": {
                    "output": {},
                    "level": { "type": "string" },
                    "cached": { "type": "boolean" },
                    "runtime": { "type": "number" },
                    "timestamp": { "type": "string", "format": "date-time" },
                    "keywords": { "type": "array", "items": { "type": "string" } }
                },
                "required": ["output", "level", "cached", "runtime", "timestamp"]
            },
            "QueryError": {
                "type": "object",
                "properties": {
                    "error": { "type": "boolean" },
                    "error_type": { "type": "string" },
                    "message": { "type": "string" }
                },
                "required": ["error", "error_type", "message"]
            },
            "DeviceResponse": {
                "type": "object",
                "properties": {
                    "name": { "type": "string" },
                    "network": { "type": "string" },
                    "display_name": { "type": "string" }
                },
                "required": ["name", "network", "display_name"]
            },
            "SupportedQueryResponse": {
                "type": "object",
                "properties": {
                    "name": { "type": "string" },
                    "display_name": { "type": "string" },
                    "enable": { "type": "boolean" }
                },
                "required": ["name", "display_name", "enable"]
            }
        })
    }

    /// Load the ordered code-sample list for one endpoint
    fn load_samples(&self, stem: &str) -> Result<Vec<Value>, SpyglassError> {
        let docs = &self.params.docs;
        let mut samples = Vec::with_capacity(SAMPLE_LANGUAGES.len());

        for (lang, ext) in SAMPLE_LANGUAGES {
            let path = docs.samples_dir.join(format!("{}.{}", stem, ext));
            let template = std::fs::read_to_string(&path).map_err(|e| {
                SpyglassError::Template(format!(
                    "Failed to read sample template '{}': {}",
                    path.display(),
                    e
                ))
            })?;
            let source = template.replace(BASE_URL_PLACEHOLDER, &docs.base_url);
            samples.push(json!({ "lang": lang, "source": source }));
        }

        Ok(samples)
    }
}
