//! Form field catalog endpoint

use axum::Json;
use health_risk_core::{FIELD_SECTIONS, FieldSection};

/// GET /api/parameters - Field labels and units, grouped by form section
pub async fn get() -> Json<&'static [FieldSection]> {
    Json(FIELD_SECTIONS)
}
