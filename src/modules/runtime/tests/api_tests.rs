//! Router-level tests for the Spyglass HTTP surface
//!
//! Exercises the assembled router end to end: envelope shapes for every
//! error kind, documentation generation, CORS policy, and static mounts.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

use spyglass_core::{Device, EngineError, Params, QueryEngine};
use spyglass_runtime::ServerBuilder;
use spyglass_types::{QueryRequest, QueryResponse};

struct EchoEngine;

#[async_trait]
impl QueryEngine for EchoEngine {
    async fn execute(&self, request: &QueryRequest) -> Result<QueryResponse, EngineError> {
        Ok(QueryResponse::text(
            format!("output for {}", request.query_target),
            0.1,
        ))
    }
}

struct FailingEngine;

#[async_trait]
impl QueryEngine for FailingEngine {
    async fn execute(&self, _request: &QueryRequest) -> Result<QueryResponse, EngineError> {
        Err(EngineError::new("no such target"))
    }
}

struct PanickingEngine;

#[async_trait]
impl QueryEngine for PanickingEngine {
    async fn execute(&self, _request: &QueryRequest) -> Result<QueryResponse, EngineError> {
        panic!("engine state corrupted");
    }
}

/// Fixture holding the temp dirs the router's mounts point at
struct Fixture {
    params: Params,
    _samples: TempDir,
    _static_root: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let samples = TempDir::new().unwrap();
        for stem in ["query", "devices", "queries"] {
            for (ext, body) in [("sh", "curl {base_url}/api/"), ("py", "requests.get('{base_url}')")] {
                fs::write(samples.path().join(format!("{}.{}", stem, ext)), body).unwrap();
            }
        }

        let static_root = TempDir::new().unwrap();
        let images = static_root.path().join("images");
        let ui = static_root.path().join("ui");
        fs::create_dir_all(&images).unwrap();
        fs::create_dir_all(&ui).unwrap();
        fs::write(images.join("logo.svg"), "<svg/>").unwrap();
        fs::write(ui.join("index.html"), "<html>spyglass ui</html>").unwrap();

        let mut params = Params {
            site_title: "Test LG".to_string(),
            devices: vec![Device::new("nyc-edge1", "production")],
            cors_origins: vec!["https://lg.example.com".to_string()],
            ..Params::default()
        };
        params.docs.samples_dir = samples.path().to_path_buf();
        params.web.logo = "/images/logo.svg".to_string();
        params.paths.images_dir = images;
        params.paths.ui_dir = ui;

        Self {
            params,
            _samples: samples,
            _static_root: static_root,
        }
    }

    fn router_with(&self, engine: Arc<dyn QueryEngine>) -> axum::Router {
        ServerBuilder::new(self.params.clone())
            .engine(engine)
            .build()
            .unwrap()
            .router()
    }
}

async fn body_json(response: axum::http::Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn query_request(body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/query/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_devices_listing() {
    let fixture = Fixture::new();
    let app = fixture.router_with(Arc::new(EchoEngine));

    let response = app
        .oneshot(Request::builder().uri("/api/devices").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body[0]["name"], "nyc-edge1");
    assert_eq!(body[0]["network"], "production");
}

#[tokio::test]
async fn test_queries_listing() {
    let fixture = Fixture::new();
    let app = fixture.router_with(Arc::new(EchoEngine));

    let response = app
        .oneshot(Request::builder().uri("/api/queries").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 5);
    assert_eq!(body[0]["name"], "bgp_route");
}

#[tokio::test]
async fn test_query_success() {
    let fixture = Fixture::new();
    let app = fixture.router_with(Arc::new(EchoEngine));

    let response = app
        .oneshot(query_request(json!({
            "query_location": "nyc-edge1",
            "query_type": "bgp_route",
            "query_target": "1.1.1.0/24"
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["output"], "output for 1.1.1.0/24");
    assert_eq!(body["level"], "success");
}

#[tokio::test]
async fn test_query_missing_field_is_422() {
    let fixture = Fixture::new();
    let app = fixture.router_with(Arc::new(EchoEngine));

    let response = app
        .oneshot(query_request(json!({
            "query_location": "nyc-edge1",
            "query_type": "bgp_route"
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    assert_eq!(body["error"], true);
    assert_eq!(body["error_type"], "validation");
    assert_eq!(body["message"], "query_target: field required");
}

#[tokio::test]
async fn test_query_domain_error_is_400() {
    let fixture = Fixture::new();
    let app = fixture.router_with(Arc::new(FailingEngine));

    let response = app
        .oneshot(query_request(json!({
            "query_location": "nyc-edge1",
            "query_type": "ping",
            "query_target": "192.0.2.1"
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], true);
    assert_eq!(body["error_type"], "application");
    assert_eq!(body["message"], "no such target");
}

#[tokio::test]
async fn test_query_panic_is_500_with_safe_text() {
    let fixture = Fixture::new();
    let app = fixture.router_with(Arc::new(PanickingEngine));

    let response = app
        .oneshot(query_request(json!({
            "query_location": "nyc-edge1",
            "query_type": "ping",
            "query_target": "192.0.2.1"
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert_eq!(body["error"], true);
    assert_eq!(body["error_type"], "internal");
    let message = body["message"].as_str().unwrap();
    assert!(!message.contains("engine state corrupted"));
}

#[tokio::test]
async fn test_docs_page_and_logo() {
    let fixture = Fixture::new();
    let app = fixture.router_with(Arc::new(EchoEngine));

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/api/docs").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(Request::builder().uri("/openapi.json").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let schema = body_json(response).await;
    assert_eq!(schema["info"]["x-logo"]["url"], "/images/logo.svg");
    assert_eq!(schema["info"]["title"], "Test LG API Documentation");
}

#[tokio::test]
async fn test_schema_has_two_samples_per_endpoint() {
    let fixture = Fixture::new();
    let app = fixture.router_with(Arc::new(EchoEngine));

    let response = app
        .oneshot(Request::builder().uri("/openapi.json").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let schema = body_json(response).await;

    for (path, method) in [
        ("/api/devices", "get"),
        ("/api/queries", "get"),
        ("/api/query/", "post"),
    ] {
        let samples = schema["paths"][path][method]["x-code-samples"]
            .as_array()
            .expect("x-code-samples missing");
        assert_eq!(samples.len(), 2, "{} should have 2 samples", path);
    }
}

#[tokio::test]
async fn test_docs_disabled_returns_404() {
    let mut fixture = Fixture::new();
    fixture.params.docs.enable = false;
    // A docs URI outside /api must still 404 rather than serve the UI index
    fixture.params.docs.uri = "/docs".to_string();
    let app = fixture.router_with(Arc::new(EchoEngine));

    for uri in ["/docs", "/openapi.json"] {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"], true);
        assert_eq!(body["error_type"], "http");
    }

    // Client-side routes still fall back to the UI index
    let response = app
        .oneshot(Request::builder().uri("/status").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(std::str::from_utf8(&bytes).unwrap().contains("spyglass ui"));
}

#[tokio::test]
async fn test_concurrent_schema_requests_see_same_document() {
    let fixture = Fixture::new();
    let app = fixture.router_with(Arc::new(EchoEngine));

    let mut handles = Vec::new();
    for _ in 0..8 {
        let app = app.clone();
        handles.push(tokio::spawn(async move {
            let response = app
                .oneshot(Request::builder().uri("/openapi.json").body(Body::empty()).unwrap())
                .await
                .unwrap();
            body_json(response).await
        }));
    }

    let mut documents = Vec::new();
    for handle in handles {
        documents.push(handle.await.unwrap());
    }
    for document in &documents[1..] {
        assert_eq!(document, &documents[0]);
    }
}

#[tokio::test]
async fn test_cors_preflight_allowed_origin() {
    let fixture = Fixture::new();
    let app = fixture.router_with(Arc::new(EchoEngine));

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/api/query/")
                .header(header::ORIGIN, "https://lg.example.com")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("https://lg.example.com")
    );
}

#[tokio::test]
async fn test_cors_preflight_unlisted_origin_gets_no_headers() {
    let fixture = Fixture::new();
    let app = fixture.router_with(Arc::new(EchoEngine));

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/api/query/")
                .header(header::ORIGIN, "https://evil.example.net")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

#[tokio::test]
async fn test_cors_dev_origin_requires_developer_mode() {
    let fixture = Fixture::new();
    let app = fixture.router_with(Arc::new(EchoEngine));

    let preflight = |app: axum::Router| async move {
        app.oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/api/devices")
                .header(header::ORIGIN, "http://localhost:3000")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
    };

    // Developer mode off: no permissive headers for the dev origin
    let response = preflight(app).await;
    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());

    // Developer mode on: dev origin is allowed
    let mut fixture = Fixture::new();
    fixture.params.developer_mode = true;
    let app = fixture.router_with(Arc::new(EchoEngine));
    let response = preflight(app).await;
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("http://localhost:3000")
    );
}

#[tokio::test]
async fn test_static_image_mount() {
    let fixture = Fixture::new();
    let app = fixture.router_with(Arc::new(EchoEngine));

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/images/logo.svg").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(Request::builder().uri("/images/missing.png").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_ui_fallback_serves_index_for_unmatched_paths() {
    let fixture = Fixture::new();
    let app = fixture.router_with(Arc::new(EchoEngine));

    // A client-side route: no file on disk, so the index document answers
    let response = app
        .oneshot(Request::builder().uri("/some/client/route").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(std::str::from_utf8(&bytes).unwrap().contains("spyglass ui"));
}
