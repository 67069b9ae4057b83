use crate::domain::{
    bus::EventBus,
    error::PipelineError,
    event::{PaymentSucceeded, Topic, WebhookEvent},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayOutcome {
    Published,
    Ignored,
}

impl RelayOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Published => "published",
            Self::Ignored => "ignored",
        }
    }
}

/// Dispatch a verified event. Only successful charges reach the bus.
pub async fn relay_event(
    bus: &dyn EventBus,
    event: WebhookEvent,
) -> Result<RelayOutcome, PipelineError> {
    match event {
        WebhookEvent::ChargeSucceeded(charge) => {
            let order_id = charge.order_id().map(String::from);
            if order_id.is_none() {
                tracing::warn!(
                    payment_id = %charge.payment_id,
                    "charge.succeeded without orderId metadata"
                );
            }

            let payload = PaymentSucceeded {
                stripe_payment_id: charge.payment_id.into_inner(),
                order_id,
                receipt_url: charge.receipt_url,
            };
            let message_id = bus
                .publish(Topic::PaymentSucceeded, serde_json::to_value(&payload)?)
                .await?;

            tracing::info!(
                %message_id,
                payment_id = %payload.stripe_payment_id,
                order_id = payload.order_id.as_deref().unwrap_or_default(),
                "payment.succeeded published"
            );
            Ok(RelayOutcome::Published)
        }
        WebhookEvent::Unhandled { event_type } => {
            tracing::info!(event_type = %event_type, "event {event_type} not handled");
            Ok(RelayOutcome::Ignored)
        }
    }
}
