use {
    super::error::PipelineError,
    super::event::WebhookEvent,
    super::session::{CheckoutSession, NewCheckoutSession},
    std::{future::Future, pin::Pin},
};

pub trait CheckoutProvider: Send + Sync {
    fn create_checkout_session(
        &self,
        session: &NewCheckoutSession,
    ) -> Pin<Box<dyn Future<Output = Result<CheckoutSession, PipelineError>> + Send + '_>>;
}

/// Authenticates a raw webhook body against its signature header and
/// interprets it. Implementations must not parse anything they did not verify.
pub trait WebhookVerifier: Send + Sync {
    fn verify(&self, payload: &str, signature: &str) -> Result<WebhookEvent, PipelineError>;
}
