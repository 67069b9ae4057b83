use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("validation: {0}")]
    Validation(String),

    #[error("webhook signature: {0}")]
    WebhookSignature(String),

    #[error("provider: {0}")]
    Provider(String),

    #[error("event bus: {0}")]
    Bus(String),

    #[error("serialization: {0}")]
    Serialization(#[from] serde_json::Error),
}
