use crate::domain::error::PipelineError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Newtype so the domain error can be turned into an HTTP response.
pub struct ApiError(pub PipelineError);

impl From<PipelineError> for ApiError {
    fn from(err: PipelineError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match &self.0 {
            PipelineError::Validation(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_error",
                msg.clone(),
            ),
            // The provider is the only caller of the webhook route, so the
            // verification message is returned as-is.
            PipelineError::WebhookSignature(msg) => (
                StatusCode::BAD_REQUEST,
                "webhook_error",
                format!("Webhook Error: {msg}"),
            ),
            PipelineError::Provider(err) => {
                tracing::error!("provider error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "provider_error",
                    "payment provider request failed".to_string(),
                )
            }
            PipelineError::Bus(err) => {
                tracing::error!("event bus error: {err}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "bus_unavailable",
                    "event could not be relayed".to_string(),
                )
            }
            PipelineError::Serialization(err) => {
                tracing::error!("serialization error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "internal error".to_string(),
                )
            }
        };

        let body = serde_json::json!({
            "error_code": error_code,
            "message": message,
        });

        (status, Json(body)).into_response()
    }
}
