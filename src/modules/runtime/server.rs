//! HTTP server assembly for Spyglass

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{
    routing::{get, post},
    Router,
};
use futures::future::BoxFuture;
use std::any::Any;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, warn};

use spyglass_core::{Params, QueryEngine, SpyglassError, UnconfiguredEngine};
use spyglass_types::ErrorEnvelope;

use crate::cors::cors_layer;
use crate::errors::INTERNAL_ERROR_MESSAGE;
use crate::handlers::{DevicesHandler, DocsHandler, QueriesHandler, QueryHandler};
use crate::openapi::SchemaGenerator;
use crate::state::AppState;

/// A startup or shutdown callable, run exactly once in registration order
pub type LifecycleHook = Box<dyn Fn() -> BoxFuture<'static, Result<(), SpyglassError>> + Send + Sync>;

/// Builder collecting everything the server needs before assembly
///
/// Nothing registered here can be mutated after `build()`; the route table,
/// CORS set, and schema document are frozen into the resulting [`Server`].
pub struct ServerBuilder {
    params: Arc<Params>,
    engine: Arc<dyn QueryEngine>,
    startup: Vec<LifecycleHook>,
    shutdown: Vec<LifecycleHook>,
}

impl ServerBuilder {
    /// Start a builder for the given configuration
    pub fn new(params: Params) -> Self {
        Self {
            params: Arc::new(params),
            engine: Arc::new(UnconfiguredEngine),
            startup: Vec::new(),
            shutdown: Vec::new(),
        }
    }

    /// Wire in the query-execution collaborator
    pub fn engine(mut self, engine: Arc<dyn QueryEngine>) -> Self {
        self.engine = engine;
        self
    }

    /// Register a startup hook; hooks run in registration order
    pub fn on_startup<F, Fut>(mut self, hook: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = Result<(), SpyglassError>> + Send + 'static,
    {
        self.startup.push(Box::new(move || Box::pin(hook())));
        self
    }

    /// Register a shutdown hook; hooks run in registration order
    pub fn on_shutdown<F, Fut>(mut self, hook: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = Result<(), SpyglassError>> + Send + 'static,
    {
        self.shutdown.push(Box::new(move || Box::pin(hook())));
        self
    }

    /// Assemble the server
    ///
    /// Builds the schema document eagerly when documentation is enabled, so
    /// a missing sample template fails here rather than on first request,
    /// and concurrent documentation requests can never race a lazy build.
    pub fn build(self) -> Result<Server, SpyglassError> {
        let cors = cors_layer(&self.params)?;

        let schema = if self.params.docs.enable {
            let generator = SchemaGenerator::new(self.params.clone());
            Some(Arc::new(generator.build()?))
        } else {
            None
        };

        let state = AppState::new(self.params.clone(), self.engine, schema);

        Ok(Server {
            params: self.params,
            state,
            cors,
            startup: self.startup,
            shutdown: self.shutdown,
        })
    }
}

/// Fully assembled, servable application
pub struct Server {
    params: Arc<Params>,
    state: AppState,
    cors: CorsLayer,
    startup: Vec<LifecycleHook>,
    shutdown: Vec<LifecycleHook>,
}

impl Server {
    /// Build the axum router
    pub fn router(&self) -> Router {
        let mut router = Router::new()
            .route("/api/devices", get(DevicesHandler::list))
            .route("/api/queries", get(QueriesHandler::list))
            .route("/api/query/", post(QueryHandler::submit));

        // Documentation routes exist only when enabled; the interactive
        // page is never part of the schema itself. When disabled, both
        // URIs answer 404 instead of falling through to the UI index.
        if self.params.docs.enable {
            router = router
                .route(&self.params.docs.uri, get(DocsHandler::page))
                .route(&self.params.docs.openapi_uri, get(DocsHandler::schema));
        } else {
            router = router
                .route(&self.params.docs.uri, axum::routing::any(api_not_found))
                .route(&self.params.docs.openapi_uri, axum::routing::any(api_not_found));
        }

        let ui_dir = &self.params.paths.ui_dir;
        let ui_index = ui_dir.join("index.html");

        router
            // Unmatched API paths get a JSON 404 instead of the UI fallback
            .route("/api/*rest", axum::routing::any(api_not_found))
            // Static mounts: images, then the UI bundle with an index
            // fallback so client-side routes resolve.
            .nest_service("/images", ServeDir::new(&self.params.paths.images_dir))
            .fallback_service(ServeDir::new(ui_dir).fallback(ServeFile::new(ui_index)))
            .with_state(self.state.clone())
            .layer(self.cors.clone())
            .layer(TimeoutLayer::new(self.params.request_timeout()))
            .layer(TraceLayer::new_for_http())
            .layer(CatchPanicLayer::custom(handle_panic))
    }

    /// Run startup hooks, serve until shutdown, then run shutdown hooks
    pub async fn run(&self) -> Result<(), SpyglassError> {
        self.run_hooks("startup", &self.startup).await?;

        let addr: SocketAddr = format!("{}:{}", self.params.listen_address(), self.params.listen_port())
            .parse()
            .map_err(|e| SpyglassError::Server(format!("Invalid address: {}", e)))?;

        let app = self.router();

        info!("Starting {} on http://{}", self.params.site_title, addr);
        info!("Devices: {}", self.params.devices.len());
        if self.params.docs.enable {
            info!("API docs: http://{}{}", addr, self.params.docs.uri);
        }

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| SpyglassError::Server(format!("Failed to bind: {}", e)))?;

        axum::serve(listener, app)
            .with_graceful_shutdown(Self::shutdown_signal())
            .await
            .map_err(|e| SpyglassError::Server(format!("Server error: {}", e)))?;

        info!("Server stopped");
        self.run_hooks("shutdown", &self.shutdown).await
    }

    /// Execute a hook list in order; the first failure is returned after
    /// every hook has been attempted
    async fn run_hooks(
        &self,
        phase: &'static str,
        hooks: &[LifecycleHook],
    ) -> Result<(), SpyglassError> {
        let mut first_failure = None;
        for (index, hook) in hooks.iter().enumerate() {
            debug!("Running {} hook {}", phase, index);
            if let Err(e) = hook().await {
                warn!("{} hook {} failed: {}", phase, index, e);
                let failure = SpyglassError::Lifecycle {
                    phase,
                    message: e.to_string(),
                };
                // Startup cannot proceed past a failed hook
                if phase == "startup" {
                    return Err(failure);
                }
                if first_failure.is_none() {
                    first_failure = Some(failure);
                }
            }
        }
        match first_failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Wait for shutdown signal
    async fn shutdown_signal() {
        let ctrl_c = async {
            signal::ctrl_c()
                .await
                .expect("Failed to install CTRL+C signal handler");
        };

        #[cfg(unix)]
        let terminate = async {
            signal::unix::signal(signal::unix::SignalKind::terminate())
                .expect("Failed to install SIGTERM signal handler")
                .recv()
                .await;
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {
                debug!("Received CTRL+C, shutting down...");
            }
            _ = terminate => {
                debug!("Received SIGTERM, shutting down...");
            }
        }
    }

    /// Get the configuration
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Get the cached schema document, if documentation is enabled
    pub fn schema(&self) -> Option<&Arc<serde_json::Value>> {
        self.state.schema.as_ref()
    }
}

/// JSON 404 for API paths with no registered route
async fn api_not_found() -> crate::errors::ApiError {
    crate::errors::ApiError::not_found("No such API endpoint")
}

/// Last-resort conversion of handler panics into the internal envelope
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> axum::response::Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    };
    error!("Handler panicked: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        axum::Json(ErrorEnvelope::new("internal", INTERNAL_ERROR_MESSAGE)),
    )
        .into_response()
}
