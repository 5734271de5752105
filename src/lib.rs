pub mod config;
pub mod error;
pub mod models;
pub mod routes;

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

pub use config::Settings;
pub use error::ConfigError;
pub use routes::docs::DOCS_PATH;

#[derive(OpenApi)]
#[openapi(
    info(
        description = "A production-ready FastAPI template",
        version = "0.1.0"
    ),
    paths(routes::system::root, routes::system::health_check),
    components(schemas(
        models::status::MessageResponse,
        models::status::HealthResponse,
        models::status::ErrorResponse,
    )),
    tags((name = "System", description = "Service root & liveness"))
)]
pub struct ApiDoc;

/// OpenAPI document carrying the configured project name.
pub fn openapi_doc(settings: &Settings) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.info.title = settings.project_name.clone();
    doc
}

/// CORS policy with credentials enabled.
///
/// Credentials rule out `*` wildcards, so methods and headers mirror the
/// preflight request and a `*` origin mirrors the caller's origin.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.iter().any(|o| o == "*") {
        AllowOrigin::mirror_request()
    } else {
        // Entries loaded through `Settings` are already valid header values.
        let origins: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|s| HeaderValue::from_str(s).ok())
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Assemble the application: handlers, docs, fallbacks, then CORS and tracing.
pub fn build_app(settings: &Settings) -> Router {
    routes::api_router()
        .merge(routes::docs::router(
            settings.openapi_url(),
            openapi_doc(settings),
        ))
        .fallback(routes::not_found)
        .method_not_allowed_fallback(routes::method_not_allowed)
        .layer(cors_layer(&settings.backend_cors_origins))
        .layer(TraceLayer::new_for_http())
}
