pub mod health;
pub mod metrics;
pub mod parameters;
mod predict;

use axum::{
    Router,
    routing::{get, post},
};

/// Build prediction API routes
pub fn api_routes() -> Router {
    Router::new()
        .route("/predict", post(predict::predict))
        .route("/analyze", post(predict::analyze))
        .route("/parameters", get(parameters::get))
}
