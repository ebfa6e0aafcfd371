//! Health check endpoint

use axum::{Extension, Json};
use serde::Serialize;

use crate::ai::GeminiClient;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    ai: String,
}

/// GET /health - Report liveness and whether the model client is configured
pub async fn check(Extension(client): Extension<Option<GeminiClient>>) -> Json<HealthResponse> {
    let ai = if client.is_some() {
        "configured"
    } else {
        "disabled"
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        ai: ai.to_string(),
    })
}
