//! Health risk prediction via Gemini

use health_risk_core::{HealthParameters, build_prompt};

use super::client::GeminiClient;

/// Ask the model for a risk assessment of `params`.
///
/// Exactly one attempt is made; the returned error carries detail for logs
/// only and is never shown to the caller.
pub async fn predict(client: &GeminiClient, params: &HealthParameters) -> Result<String, String> {
    let prompt = build_prompt(params);

    tracing::debug!(model = client.model(), prompt_len = prompt.len(), "Requesting prediction");

    let text = client.generate(&prompt).await?;

    tracing::debug!(reply_len = text.len(), "Prediction received");
    Ok(text)
}
