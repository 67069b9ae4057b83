use {
    crate::{
        AppState, domain::error::PipelineError, services::relay::relay_event,
        transport::http::errors::ApiError,
    },
    axum::{Json, extract::State, http::HeaderMap},
};

pub const SIGNATURE_HEADER: &str = "Stripe-Signature";

#[tracing::instrument(
    name = "webhook",
    skip_all,
    fields(event_type = tracing::field::Empty)
)]
pub async fn webhook_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> Result<Json<serde_json::Value>, ApiError> {
    let sig = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| {
            PipelineError::WebhookSignature(format!("missing {SIGNATURE_HEADER} header"))
        })?;

    let event = state.verifier.verify(&body, sig).inspect_err(|e| {
        tracing::warn!(error = %e, "webhook rejected");
    })?;

    tracing::Span::current().record("event_type", tracing::field::display(event.event_type()));

    let outcome = relay_event(state.bus.as_ref(), event).await?;
    Ok(Json(serde_json::json!({"status": outcome.as_str()})))
}
