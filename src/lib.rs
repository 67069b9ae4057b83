pub mod adapters;
pub mod config;
pub mod domain;
pub mod infra;
pub mod services;
pub mod transport;

use {
    domain::{
        bus::EventBus,
        provider::{CheckoutProvider, WebhookVerifier},
    },
    std::sync::Arc,
};

#[derive(Clone)]
pub struct AppState {
    pub checkout: Arc<dyn CheckoutProvider>,
    pub verifier: Arc<dyn WebhookVerifier>,
    pub bus: Arc<dyn EventBus>,
}
