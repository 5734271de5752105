use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct MessageResponse {
    /// Greeting shown at the service root
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct HealthResponse {
    /// Always `healthy` while the process is serving
    pub status: String,
}

/// Body returned for unmatched routes and methods.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}
