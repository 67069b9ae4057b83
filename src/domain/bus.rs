use {
    super::error::PipelineError,
    super::event::Topic,
    chrono::{DateTime, Utc},
    serde::{Deserialize, Serialize},
    std::{future::Future, pin::Pin},
    uuid::Uuid,
};

/// Envelope around every payload put on the bus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusMessage {
    pub id: Uuid,
    pub topic: String,
    pub published_at: DateTime<Utc>,
    pub payload: serde_json::Value,
}

impl BusMessage {
    pub fn new(topic: Topic, payload: serde_json::Value) -> Self {
        Self {
            id: Uuid::now_v7(),
            topic: topic.to_string(),
            published_at: Utc::now(),
            payload,
        }
    }
}

pub trait EventBus: Send + Sync {
    fn publish(
        &self,
        topic: Topic,
        payload: serde_json::Value,
    ) -> Pin<Box<dyn Future<Output = Result<Uuid, PipelineError>> + Send + '_>>;
}
