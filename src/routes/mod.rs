pub mod docs;
pub mod system;

use axum::{http::StatusCode, Json, Router};

use crate::models::status::ErrorResponse;

pub fn api_router() -> Router {
    Router::new().merge(system::router())
}

fn err(status: StatusCode, msg: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            detail: msg.to_string(),
        }),
    )
}

pub(crate) async fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    err(StatusCode::NOT_FOUND, "Not Found")
}

pub(crate) async fn method_not_allowed() -> (StatusCode, Json<ErrorResponse>) {
    err(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
}
