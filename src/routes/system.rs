use axum::{routing::get, Json, Router};

use crate::models::status::{HealthResponse, MessageResponse};

pub const WELCOME_MESSAGE: &str = "Welcome to FastAPI Template!";

pub fn router() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Welcome message", body = MessageResponse),
    ),
    tag = "System"
)]
pub(crate) async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: WELCOME_MESSAGE.to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse),
    ),
    tag = "System"
)]
pub(crate) async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}
