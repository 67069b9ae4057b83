use {
    crate::domain::{
        bus::{BusMessage, EventBus},
        error::PipelineError,
        event::Topic,
    },
    std::{future::Future, pin::Pin},
    tokio::sync::broadcast,
    uuid::Uuid,
};

const DEFAULT_CAPACITY: usize = 256;

/// Broadcast-backed bus. A publish with nobody listening is a failure:
/// the message would otherwise vanish.
#[derive(Clone)]
pub struct InProcessBus {
    sender: broadcast::Sender<BusMessage>,
}

impl InProcessBus {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<BusMessage> {
        self.sender.subscribe()
    }
}

impl Default for InProcessBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus for InProcessBus {
    fn publish(
        &self,
        topic: Topic,
        payload: serde_json::Value,
    ) -> Pin<Box<dyn Future<Output = Result<Uuid, PipelineError>> + Send + '_>> {
        let message = BusMessage::new(topic, payload);
        Box::pin(async move {
            let id = message.id;
            let receivers = self
                .sender
                .send(message)
                .map_err(|_| PipelineError::Bus(format!("no subscribers for {topic}")))?;
            tracing::debug!(message_id = %id, %topic, receivers, "published");
            Ok(id)
        })
    }
}

/// Drains the bus and logs each message. Stands in for the downstream
/// consumer when the service runs on its own.
pub async fn run_logging_subscriber(mut receiver: broadcast::Receiver<BusMessage>) {
    tracing::info!("bus logging subscriber started");

    loop {
        match receiver.recv().await {
            Ok(message) => {
                tracing::info!(
                    message_id = %message.id,
                    topic = %message.topic,
                    payload = %message.payload,
                    "bus message"
                );
            }
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                tracing::error!(skipped, "bus subscriber lagged, messages lost");
            }
            Err(broadcast::error::RecvError::Closed) => {
                tracing::info!("bus closed, subscriber stopping");
                return;
            }
        }
    }
}
