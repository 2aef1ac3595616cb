//! Interactive documentation handlers

use axum::extract::State;
use axum::response::Html;
use axum::Json;
use serde_json::Value;

use spyglass_core::DocsMode;

use crate::errors::ApiError;
use crate::state::AppState;

/// Handler for the documentation page and schema document
pub struct DocsHandler;

impl DocsHandler {
    /// Handle GET on the configured docs URI
    pub async fn page(State(state): State<AppState>) -> Html<String> {
        let docs = &state.params.docs;
        let title = docs.title_for(&state.params.site_title);
        let html = match docs.mode {
            DocsMode::Redoc => Self::redoc_page(&title, &docs.openapi_uri),
            DocsMode::Swagger => Self::swagger_page(&title, &docs.openapi_uri),
        };
        Html(html)
    }

    /// Handle GET on the configured schema URI
    ///
    /// Serves the document built once at startup; every request sees the
    /// same cached object.
    pub async fn schema(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
        match &state.schema {
            Some(schema) => Ok(Json(schema.as_ref().clone())),
            // Docs disabled: route not registered, but keep the handler total
            None => Err(ApiError::not_found("Documentation is disabled")),
        }
    }

    fn redoc_page(title: &str, schema_uri: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html>
  <head>
    <title>{title}</title>
    <meta charset="utf-8"/>
    <meta name="viewport" content="width=device-width, initial-scale=1"/>
    <style>body {{ margin: 0; padding: 0; }}</style>
  </head>
  <body>
    <redoc spec-url="{schema_uri}"></redoc>
    <script src="https://cdn.redoc.ly/redoc/latest/bundles/redoc.standalone.js"></script>
  </body>
</html>
"#
        )
    }

    fn swagger_page(title: &str, schema_uri: &str) -> String {
        format!(
            r##"<!DOCTYPE html>
<html>
  <head>
    <title>{title}</title>
    <meta charset="utf-8"/>
    <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css"/>
  </head>
  <body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
    <script>
      window.onload = () => {{
        SwaggerUIBundle({{ url: "{schema_uri}", dom_id: "#swagger-ui" }});
      }};
    </script>
  </body>
</html>
"##
        )
    }
}
