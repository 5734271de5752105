use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use utoipa::openapi::OpenApi;
use utoipa_swagger_ui::Config;

use super::err;

/// Path of the interactive API documentation.
pub const DOCS_PATH: &str = "/docs";

#[derive(Clone)]
struct DocsState {
    config: Arc<Config<'static>>,
    openapi: Arc<OpenApi>,
}

/// Swagger UI at `/docs` and the OpenAPI document at `openapi_url`.
///
/// The index is served directly at `/docs` (no redirect), with a `<base>`
/// pointing at `/docs/` so its relative asset links resolve.
pub fn router(openapi_url: String, openapi: OpenApi) -> Router {
    let state = DocsState {
        config: Arc::new(Config::new([openapi_url.clone()])),
        openapi: Arc::new(openapi),
    };

    Router::new()
        .route(&openapi_url, get(openapi_json))
        .route(DOCS_PATH, get(index))
        .route(&format!("{DOCS_PATH}/"), get(index))
        .route(&format!("{DOCS_PATH}/{{*rest}}"), get(asset))
        .with_state(state)
}

async fn openapi_json(State(state): State<DocsState>) -> Json<OpenApi> {
    Json(state.openapi.as_ref().clone())
}

async fn index(State(state): State<DocsState>) -> Response {
    match utoipa_swagger_ui::serve("index.html", state.config) {
        Ok(Some(file)) => {
            Html(with_base_href(&String::from_utf8_lossy(&file.bytes))).into_response()
        }
        Ok(None) => err(StatusCode::NOT_FOUND, "Not Found").into_response(),
        Err(e) => {
            tracing::error!("Failed to render Swagger UI index: {}", e);
            err(StatusCode::INTERNAL_SERVER_ERROR, "Failed to render docs").into_response()
        }
    }
}

async fn asset(Path(rest): Path<String>, State(state): State<DocsState>) -> Response {
    match utoipa_swagger_ui::serve(&rest, state.config) {
        Ok(Some(file)) => (
            [(header::CONTENT_TYPE, file.content_type)],
            file.bytes.into_owned(),
        )
            .into_response(),
        Ok(None) => err(StatusCode::NOT_FOUND, "Not Found").into_response(),
        Err(e) => {
            tracing::error!("Failed to serve Swagger UI asset {}: {}", rest, e);
            err(StatusCode::INTERNAL_SERVER_ERROR, "Failed to serve docs asset").into_response()
        }
    }
}

fn with_base_href(html: &str) -> String {
    let base = format!("<base href=\"{DOCS_PATH}/\" />");
    match html.find("<head>") {
        Some(pos) => {
            let at = pos + "<head>".len();
            format!("{}\n    {}{}", &html[..at], base, &html[at..])
        }
        None => format!("{base}\n{html}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_href_injected_after_head() {
        let html = "<!DOCTYPE html><html><head><title>x</title></head></html>";
        let out = with_base_href(html);
        assert!(out.starts_with("<!DOCTYPE html><html><head>\n    <base href=\"/docs/\" />"));
        assert!(out.ends_with("<title>x</title></head></html>"));
    }

    #[test]
    fn test_base_href_prepended_without_head() {
        let out = with_base_href("<div id=\"swagger-ui\"></div>");
        assert!(out.starts_with("<base href=\"/docs/\" />"));
    }
}
