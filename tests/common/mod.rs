#![allow(dead_code)]

use checkout_relay::AppState;
use checkout_relay::adapters::stripe::{StripeGateway, StripeSettings};
use checkout_relay::domain::bus::EventBus;
use checkout_relay::domain::error::PipelineError;
use checkout_relay::domain::event::Topic;
use checkout_relay::domain::provider::CheckoutProvider;
use checkout_relay::domain::session::{
    CheckoutSession, NewCheckoutSession, PaymentSessionItem, PaymentSessionRequest,
};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

pub const ENDPOINT_SECRET: &str = "whsec_test_secret";
pub const SUCCESS_URL: &str = "https://shop.test/payments/success";
pub const CANCEL_URL: &str = "https://shop.test/payments/cancel";

pub fn settings() -> StripeSettings {
    StripeSettings {
        secret_key: "sk_test_123".into(),
        endpoint_secret: ENDPOINT_SECRET.into(),
        success_url: SUCCESS_URL.into(),
        cancel_url: CANCEL_URL.into(),
    }
}

pub fn gateway() -> StripeGateway {
    StripeGateway::new(settings())
}

// ── Fakes ──────────────────────────────────────────────────────────────────

/// Checkout provider that answers from the request alone, recording what it saw.
#[derive(Default)]
pub struct FakeCheckoutProvider {
    pub sessions: Mutex<Vec<NewCheckoutSession>>,
    pub fail: bool,
}

impl FakeCheckoutProvider {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn recorded(&self) -> Vec<NewCheckoutSession> {
        self.sessions.lock().unwrap().clone()
    }
}

impl CheckoutProvider for FakeCheckoutProvider {
    fn create_checkout_session(
        &self,
        session: &NewCheckoutSession,
    ) -> Pin<Box<dyn Future<Output = Result<CheckoutSession, PipelineError>> + Send + '_>> {
        let session = session.clone();
        Box::pin(async move {
            if self.fail {
                return Err(PipelineError::Provider("Stripe API: invalid currency".into()));
            }
            // Yield so concurrent callers interleave.
            tokio::task::yield_now().await;
            let order_id = session.order_id.as_str().to_string();
            self.sessions.lock().unwrap().push(session);
            Ok(CheckoutSession {
                id: format!("cs_test_{order_id}"),
                success_url: Some(SUCCESS_URL.into()),
                cancel_url: Some(CANCEL_URL.into()),
                url: Some(format!("https://checkout.test/pay/{order_id}")),
            })
        })
    }
}

/// Bus that keeps everything it was asked to publish.
#[derive(Default)]
pub struct RecordingBus {
    pub published: Mutex<Vec<(Topic, serde_json::Value)>>,
    pub fail: bool,
}

impl RecordingBus {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn messages(&self) -> Vec<(Topic, serde_json::Value)> {
        self.published.lock().unwrap().clone()
    }
}

impl EventBus for RecordingBus {
    fn publish(
        &self,
        topic: Topic,
        payload: serde_json::Value,
    ) -> Pin<Box<dyn Future<Output = Result<Uuid, PipelineError>> + Send + '_>> {
        Box::pin(async move {
            if self.fail {
                return Err(PipelineError::Bus("bus unavailable".into()));
            }
            self.published.lock().unwrap().push((topic, payload));
            Ok(Uuid::now_v7())
        })
    }
}

pub fn app_state(checkout: Arc<FakeCheckoutProvider>, bus: Arc<RecordingBus>) -> AppState {
    AppState {
        checkout,
        verifier: Arc::new(gateway()),
        bus,
    }
}

// ── Request builders ───────────────────────────────────────────────────────

pub fn item(name: &str, price: f64, quantity: i64) -> PaymentSessionItem {
    PaymentSessionItem {
        name: name.into(),
        price,
        quantity,
    }
}

pub fn session_request(order_id: &str, items: Vec<PaymentSessionItem>) -> PaymentSessionRequest {
    PaymentSessionRequest {
        currency: "usd".into(),
        items,
        order_id: order_id.into(),
    }
}

// ── Stripe webhook fixtures ────────────────────────────────────────────────

/// A charge event in the shape Stripe delivers it.
pub fn charge_event(
    event_type: &str,
    charge_id: &str,
    metadata: serde_json::Value,
    receipt_url: Option<&str>,
) -> String {
    let created = chrono::Utc::now().timestamp();
    let status = if event_type == "charge.failed" {
        "failed"
    } else {
        "succeeded"
    };

    serde_json::json!({
        "id": "evt_test_1",
        "object": "event",
        "created": created,
        "livemode": false,
        "pending_webhooks": 1,
        "type": event_type,
        "data": {
            "object": {
                "id": charge_id,
                "object": "charge",
                "amount": 1999,
                "amount_captured": 1999,
                "amount_refunded": 0,
                "billing_details": {
                    "address": null,
                    "email": null,
                    "name": null,
                    "phone": null
                },
                "captured": true,
                "created": created,
                "currency": "usd",
                "disputed": false,
                "fraud_details": {},
                "livemode": false,
                "metadata": metadata,
                "paid": status == "succeeded",
                "payment_intent": "pi_test_1",
                "receipt_url": receipt_url,
                "refunded": false,
                "refunds": {
                    "object": "list",
                    "data": [],
                    "has_more": false,
                    "total_count": 0,
                    "url": format!("/v1/charges/{charge_id}/refunds")
                },
                "status": status
            }
        }
    })
    .to_string()
}

/// An event whose `data.object` kind the typed Stripe model has no variant for.
pub fn unmodeled_event(event_type: &str) -> String {
    serde_json::json!({
        "id": "evt_test_2",
        "object": "event",
        "created": chrono::Utc::now().timestamp(),
        "livemode": false,
        "pending_webhooks": 1,
        "type": event_type,
        "data": {
            "object": {
                "id": "issfr_test_1",
                "object": "radar.early_fraud_warning",
                "actionable": true,
                "charge": "ch_123",
                "created": chrono::Utc::now().timestamp(),
                "fraud_type": "made_with_stolen_card",
                "livemode": false
            }
        }
    })
    .to_string()
}

/// A `charge.succeeded` event carrying only the fields the relay reads, too
/// sparse for the typed Stripe model.
pub fn sparse_charge_event(
    charge_id: &str,
    metadata: serde_json::Value,
    receipt_url: Option<&str>,
) -> String {
    serde_json::json!({
        "id": "evt_test_3",
        "object": "event",
        "created": chrono::Utc::now().timestamp(),
        "livemode": false,
        "pending_webhooks": 1,
        "type": "charge.succeeded",
        "data": {
            "object": {
                "id": charge_id,
                "object": "charge",
                "metadata": metadata,
                "receipt_url": receipt_url
            }
        }
    })
    .to_string()
}

/// `Stripe-Signature` header value for `payload` signed at `timestamp`.
pub fn sign(payload: &str, secret: &str, timestamp: i64) -> String {
    let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes()).unwrap();
    mac.update(format!("{timestamp}.{payload}").as_bytes());
    let signature = hex::encode(mac.finalize().into_bytes());
    format!("t={timestamp},v1={signature}")
}

pub fn sign_now(payload: &str) -> String {
    sign(payload, ENDPOINT_SECRET, chrono::Utc::now().timestamp())
}
