pub mod errors;
pub mod payments;
pub mod webhook;

use {
    crate::AppState,
    axum::{
        Router,
        extract::DefaultBodyLimit,
        routing::{get, post},
    },
    tower_http::trace::TraceLayer,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "ok" }))
        .route(
            "/payments/create-payment-session",
            post(payments::create_payment_session_handler),
        )
        .route("/payments/success", get(payments::success_handler))
        .route("/payments/cancel", get(payments::cancel_handler))
        .route("/payments/webhook", post(webhook::webhook_handler))
        .layer(DefaultBodyLimit::max(64 * 1024)) // Stripe events are typically under 20 KB
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
