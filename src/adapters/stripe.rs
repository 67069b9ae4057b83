use {
    crate::domain::{
        error::PipelineError,
        event::{ChargeSucceeded, ORDER_ID_METADATA_KEY, WebhookEvent},
        id::PaymentId,
        money::CurrencyCode,
        provider::{CheckoutProvider, WebhookVerifier},
        session::{CheckoutSession, NewCheckoutSession},
    },
    std::{collections::HashMap, fmt, future::Future, pin::Pin, str::FromStr},
};

/// Stripe settings needed by both the session initiator and the webhook relay.
#[derive(Clone)]
pub struct StripeSettings {
    pub secret_key: String,
    pub endpoint_secret: String,
    pub success_url: String,
    pub cancel_url: String,
}

impl fmt::Debug for StripeSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StripeSettings")
            .field("secret_key", &"<redacted>")
            .field("endpoint_secret", &"<redacted>")
            .field("success_url", &self.success_url)
            .field("cancel_url", &self.cancel_url)
            .finish()
    }
}

/// The one configured Stripe client, built at startup and shared by handlers.
pub struct StripeGateway {
    client: stripe::Client,
    endpoint_secret: String,
    success_url: String,
    cancel_url: String,
}

impl StripeGateway {
    pub fn new(settings: StripeSettings) -> Self {
        Self {
            client: stripe::Client::new(settings.secret_key),
            endpoint_secret: settings.endpoint_secret,
            success_url: settings.success_url,
            cancel_url: settings.cancel_url,
        }
    }

    /// Builds the session-creation request: single payment mode, one priced
    /// line item per cart entry, order id attached to the payment intent.
    pub fn checkout_params<'a>(
        &'a self,
        session: &NewCheckoutSession,
    ) -> Result<stripe::CreateCheckoutSession<'a>, PipelineError> {
        let currency = convert_currency(&session.currency)?;

        let line_items = session
            .line_items
            .iter()
            .map(|item| stripe::CreateCheckoutSessionLineItems {
                price_data: Some(stripe::CreateCheckoutSessionLineItemsPriceData {
                    currency,
                    product_data: Some(
                        stripe::CreateCheckoutSessionLineItemsPriceDataProductData {
                            name: item.name.clone(),
                            ..Default::default()
                        },
                    ),
                    unit_amount: Some(item.unit_amount.cents()),
                    ..Default::default()
                }),
                quantity: Some(item.quantity),
                ..Default::default()
            })
            .collect();

        let metadata = HashMap::from([(
            ORDER_ID_METADATA_KEY.to_string(),
            session.order_id.as_str().to_string(),
        )]);

        let mut params = stripe::CreateCheckoutSession::new();
        params.mode = Some(stripe::CheckoutSessionMode::Payment);
        params.line_items = Some(line_items);
        params.payment_intent_data = Some(stripe::CreateCheckoutSessionPaymentIntentData {
            metadata: Some(metadata),
            ..Default::default()
        });
        params.success_url = Some(self.success_url.as_str());
        params.cancel_url = Some(self.cancel_url.as_str());
        Ok(params)
    }

    async fn create_checkout_session_inner(
        &self,
        session: &NewCheckoutSession,
    ) -> Result<CheckoutSession, PipelineError> {
        let params = self.checkout_params(session)?;
        let created = stripe::CheckoutSession::create(&self.client, params)
            .await
            .map_err(|e| PipelineError::Provider(format!("Stripe API: {e}")))?;

        Ok(CheckoutSession {
            id: created.id.to_string(),
            success_url: created.success_url,
            cancel_url: created.cancel_url,
            url: created.url,
        })
    }
}

impl CheckoutProvider for StripeGateway {
    fn create_checkout_session(
        &self,
        session: &NewCheckoutSession,
    ) -> Pin<Box<dyn Future<Output = Result<CheckoutSession, PipelineError>> + Send + '_>> {
        let session = session.clone();
        Box::pin(async move { self.create_checkout_session_inner(&session).await })
    }
}

impl WebhookVerifier for StripeGateway {
    fn verify(&self, payload: &str, signature: &str) -> Result<WebhookEvent, PipelineError> {
        let verified = stripe::Webhook::construct_event(payload, signature, &self.endpoint_secret);

        match verified {
            Ok(event) => {
                // The typed event only exposes an enum; read the wire name for logs.
                let raw_event: serde_json::Value = serde_json::from_str(payload)?;
                webhook_event_from_stripe(event_type_of(&raw_event), event.data.object)
            }
            // Signature checked out, but the object kind is one the SDK does not model.
            Err(stripe::WebhookError::BadParse(err)) => {
                let raw_event: serde_json::Value = serde_json::from_str(payload)?;
                tracing::debug!(
                    event_type = event_type_of(&raw_event),
                    error = %err,
                    "typed decode failed, reading raw event"
                );
                webhook_event_from_raw(&raw_event)
            }
            Err(err) => Err(PipelineError::WebhookSignature(err.to_string())),
        }
    }
}

fn event_type_of(raw_event: &serde_json::Value) -> &str {
    raw_event
        .get("type")
        .and_then(|v| v.as_str())
        .unwrap_or("unknown")
}

pub fn webhook_event_from_stripe(
    event_type: &str,
    object: stripe::EventObject,
) -> Result<WebhookEvent, PipelineError> {
    match (event_type, object) {
        ("charge.succeeded", stripe::EventObject::Charge(charge)) => {
            Ok(WebhookEvent::ChargeSucceeded(ChargeSucceeded {
                payment_id: PaymentId::new(charge.id.to_string())?,
                metadata: charge.metadata,
                receipt_url: charge.receipt_url,
            }))
        }
        (other, _) => Ok(WebhookEvent::Unhandled {
            event_type: other.to_string(),
        }),
    }
}

/// Reads an already verified event straight from its JSON, for payloads the
/// typed SDK model cannot decode.
pub fn webhook_event_from_raw(raw_event: &serde_json::Value) -> Result<WebhookEvent, PipelineError> {
    let event_type = event_type_of(raw_event);
    let object = &raw_event["data"]["object"];

    if event_type != "charge.succeeded" || object["object"] != "charge" {
        return Ok(WebhookEvent::Unhandled {
            event_type: event_type.to_string(),
        });
    }

    let payment_id = object["id"]
        .as_str()
        .ok_or_else(|| PipelineError::Validation("charge without id".into()))?;
    let metadata = object["metadata"]
        .as_object()
        .map(|entries| {
            entries
                .iter()
                .filter_map(|(k, v)| Some((k.clone(), v.as_str()?.to_string())))
                .collect::<HashMap<_, _>>()
        })
        .unwrap_or_default();

    Ok(WebhookEvent::ChargeSucceeded(ChargeSucceeded {
        payment_id: PaymentId::new(payment_id)?,
        metadata,
        receipt_url: object["receipt_url"].as_str().map(String::from),
    }))
}

pub fn convert_currency(code: &CurrencyCode) -> Result<stripe::Currency, PipelineError> {
    stripe::Currency::from_str(code.as_str())
        .map_err(|_| PipelineError::Validation(format!("unsupported currency: {code}")))
}
