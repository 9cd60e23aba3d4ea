//! Change notifications.
//!
//! After a successful create, update, or delete the handlers publish a
//! [`ChangeEvent`] through a [`Notifier`]. Publishing is best-effort: a
//! failure is logged and never changes the HTTP response.
//!
//! The production notifier produces JSON records to a Kafka topic:
//!
//! ```json
//! {"id":"3f00e7f6-f9c8-4a3a-8a27-2bd529b161e4","event":"created","timestamp":1700000000}
//! ```

use std::collections::BTreeMap;

use async_trait::async_trait;
use company_core::ChangeEvent;
use rskafka::client::ClientBuilder;
use rskafka::client::partition::{Compression, PartitionClient, UnknownTopicHandling};
use rskafka::record::Record;

/// Notification errors.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// Event could not be encoded.
    #[error("failed to serialize event: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Broker rejected the record or was unreachable.
    #[error("kafka error: {0}")]
    Kafka(#[from] rskafka::client::error::Error),
}

/// Publishes change events.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Stamp the event with the current time and publish it.
    async fn send(&self, event: ChangeEvent) -> Result<(), NotifyError>;

    /// Release broker connections.
    async fn close(&self) {}
}

/// Kafka producer for change events.
pub struct KafkaNotifier {
    topic: String,
    partition: i32,
    client: PartitionClient,
}

impl KafkaNotifier {
    /// Connect to the brokers and resolve the partition leader for `topic`.
    pub async fn connect(
        brokers: Vec<String>,
        topic: impl Into<String>,
        partition: i32,
    ) -> Result<Self, NotifyError> {
        let topic = topic.into();
        tracing::info!(brokers = ?brokers, topic = %topic, partition, "Connecting to Kafka...");

        let client = ClientBuilder::new(brokers).build().await?;
        let client = client
            .partition_client(topic.clone(), partition, UnknownTopicHandling::Error)
            .await?;

        tracing::info!("Connected to Kafka");

        Ok(Self {
            topic,
            partition,
            client,
        })
    }

    /// Topic events are published to.
    pub fn topic(&self) -> &str {
        &self.topic
    }
}

/// Encode a stamped event as a Kafka record keyed by company id.
fn event_record(event: &ChangeEvent) -> Result<Record, NotifyError> {
    let payload = serde_json::to_vec(event)?;
    Ok(Record {
        key: Some(event.id.to_string().into_bytes()),
        value: Some(payload),
        headers: BTreeMap::new(),
        timestamp: chrono::Utc::now(),
    })
}

#[async_trait]
impl Notifier for KafkaNotifier {
    async fn send(&self, event: ChangeEvent) -> Result<(), NotifyError> {
        let event = event.stamped();

        let record = event_record(&event).inspect_err(|e| {
            tracing::error!(error = %e, event = ?event, "Failed to marshal event");
        })?;

        self.client
            .produce(vec![record], Compression::NoCompression)
            .await
            .inspect_err(|e| {
                tracing::error!(error = %e, topic = %self.topic, "Kafka send failed");
            })?;

        tracing::info!(
            topic = %self.topic,
            partition = self.partition,
            company_id = %event.id,
            event = %event.event,
            timestamp = event.timestamp,
            "Notification sent to Kafka"
        );
        Ok(())
    }
}

impl std::fmt::Debug for KafkaNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KafkaNotifier")
            .field("topic", &self.topic)
            .field("partition", &self.partition)
            .finish_non_exhaustive()
    }
}
