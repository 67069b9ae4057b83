use {
    crate::{
        AppState,
        domain::{
            error::PipelineError,
            session::{PaymentSessionRequest, PaymentSessionResponse},
        },
        services::checkout::create_payment_session,
        transport::http::errors::ApiError,
    },
    axum::{
        Json,
        extract::{State, rejection::JsonRejection},
    },
};

pub async fn create_payment_session_handler(
    State(state): State<AppState>,
    payload: Result<Json<PaymentSessionRequest>, JsonRejection>,
) -> Result<Json<PaymentSessionResponse>, ApiError> {
    let Json(request) =
        payload.map_err(|e| PipelineError::Validation(e.body_text()))?;

    let response = create_payment_session(state.checkout.as_ref(), &request).await?;
    Ok(Json(response))
}

pub async fn success_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "ok": true,
        "message": "Payment successful",
    }))
}

pub async fn cancel_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "ok": false,
        "message": "Payment cancelled",
    }))
}
