use crate::domain::{
    error::PipelineError,
    provider::CheckoutProvider,
    session::{PaymentSessionRequest, PaymentSessionResponse},
};

/// Validate the cart, ask the provider for a hosted checkout session and
/// return its redirect URLs. Provider failures propagate untouched.
#[tracing::instrument(
    name = "create_payment_session",
    skip_all,
    fields(order_id = %request.order_id, currency = %request.currency, items = request.items.len())
)]
pub async fn create_payment_session(
    provider: &dyn CheckoutProvider,
    request: &PaymentSessionRequest,
) -> Result<PaymentSessionResponse, PipelineError> {
    let session = request.validate()?;
    let created = provider.create_checkout_session(&session).await?;

    tracing::info!(session_id = %created.id, "checkout session created");
    Ok(created.into())
}
