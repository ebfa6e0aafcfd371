//! Prediction endpoints (/api/predict, /api/analyze)

use axum::{Extension, Json, extract::rejection::JsonRejection, response::IntoResponse};
use health_risk_core::{HealthParameters, SegmentedResult, segment};
use serde::Serialize;

use crate::ai::GeminiClient;
use crate::error::AppError;

/// Response body for /api/predict
#[derive(Serialize)]
pub struct PredictResponse {
    prediction: String,
}

/// Response body for /api/analyze
#[derive(Serialize)]
pub struct AnalyzeResponse {
    prediction: String,
    #[serde(flatten)]
    sections: SegmentedResult,
}

/// POST /api/predict - Raw model assessment of the submitted parameters
pub async fn predict(
    Extension(client): Extension<Option<GeminiClient>>,
    payload: Result<Json<HealthParameters>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(params) = payload?;
    let prediction = request_prediction(client.as_ref(), &params).await?;

    Ok(Json(PredictResponse { prediction }))
}

/// POST /api/analyze - Model assessment split into predictions and recommendations
pub async fn analyze(
    Extension(client): Extension<Option<GeminiClient>>,
    payload: Result<Json<HealthParameters>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(params) = payload?;
    let prediction = request_prediction(client.as_ref(), &params).await?;
    let sections = segment(&prediction);

    if sections.is_empty() {
        tracing::warn!("Model reply contained no recognizable sections");
    }

    Ok(Json(AnalyzeResponse {
        prediction,
        sections,
    }))
}

/// Run one prediction, collapsing every failure into `AppError::PredictionFailed`
async fn request_prediction(
    client: Option<&GeminiClient>,
    params: &HealthParameters,
) -> Result<String, AppError> {
    let Some(client) = client else {
        tracing::error!("GEMINI_API_KEY not configured");
        metrics::counter!("predictions_total", "outcome" => "failure").increment(1);
        return Err(AppError::PredictionFailed);
    };

    match crate::ai::predictor::predict(client, params).await {
        Ok(text) => {
            metrics::counter!("predictions_total", "outcome" => "success").increment(1);
            Ok(text)
        }
        Err(e) => {
            tracing::error!(error = %e, "Prediction error");
            metrics::counter!("predictions_total", "outcome" => "failure").increment(1);
            Err(AppError::PredictionFailed)
        }
    }
}
