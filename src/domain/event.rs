use {
    super::id::PaymentId,
    derive_more::Display,
    serde::{Deserialize, Serialize},
    std::collections::HashMap,
};

/// Metadata key under which the order id travels through the provider.
pub const ORDER_ID_METADATA_KEY: &str = "orderId";

/// A verified provider event. Only successful charges are interpreted;
/// adding a provider event type means adding a variant here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebhookEvent {
    ChargeSucceeded(ChargeSucceeded),
    Unhandled { event_type: String },
}

impl WebhookEvent {
    pub fn event_type(&self) -> &str {
        match self {
            Self::ChargeSucceeded(_) => "charge.succeeded",
            Self::Unhandled { event_type } => event_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChargeSucceeded {
    pub payment_id: PaymentId,
    pub metadata: HashMap<String, String>,
    pub receipt_url: Option<String>,
}

impl ChargeSucceeded {
    /// The order id exactly as it came back in the charge metadata.
    pub fn order_id(&self) -> Option<&str> {
        self.metadata.get(ORDER_ID_METADATA_KEY).map(String::as_str)
    }
}

/// Normalized payload published for downstream order processing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSucceeded {
    pub stripe_payment_id: String,
    pub order_id: Option<String>,
    pub receipt_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Topic {
    #[display("payment.succeeded")]
    PaymentSucceeded,
}
