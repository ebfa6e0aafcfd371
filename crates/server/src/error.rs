//! Application error handling

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Body returned for any failed prediction, whatever the cause
pub const PREDICTION_FAILED: &str = "Prediction failed";

/// Application error type
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    PredictionFailed,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::PredictionFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                PREDICTION_FAILED.to_string(),
            ),
        };

        (status, Json(ErrorBody { error })).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}
