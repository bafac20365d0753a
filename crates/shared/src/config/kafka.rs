use async_trait::async_trait;
use rdkafka::config::ClientConfig;
use rdkafka::error::KafkaResult;
use rdkafka::producer::{BaseProducer, BaseRecord, Producer};
use std::{sync::Arc, time::Duration};
use tracing::{info, warn};

use crate::abstract_trait::KafkaTrait;
use crate::errors::ServiceError;

#[derive(Clone)]
pub struct Kafka {
    producer: Arc<BaseProducer>,
    flush_timeout: Duration,
}

impl Kafka {
    /// Creating the producer does not contact the brokers; delivery problems show up on publish.
    pub fn new(brokers: &str) -> Result<Self, ServiceError> {
        let producer: BaseProducer = ClientConfig::new()
            .set("bootstrap.servers", brokers)
            .set("message.timeout.ms", "6000")
            .set("allow.auto.create.topics", "true")
            .create()?;

        info!("Kafka producer configured for {brokers}");

        Ok(Kafka {
            producer: Arc::new(producer),
            flush_timeout: Duration::from_secs(1),
        })
    }

    fn send_message(&self, topic: &str, key: &str, value: &[u8]) -> KafkaResult<()> {
        self.producer
            .send(BaseRecord::to(topic).key(key).payload(value))
            .map_err(|(kafka_error, _record)| kafka_error)?;

        if let Err(e) = self.producer.flush(self.flush_timeout) {
            warn!(topic, "Kafka flush did not complete: {e}");
        }

        info!(topic, "Message queued for delivery");
        Ok(())
    }
}

#[async_trait]
impl KafkaTrait for Kafka {
    async fn publish(&self, topic: &str, key: &str, value: &[u8]) -> Result<(), ServiceError> {
        // flush blocks, keep it off the async workers
        let this = self.clone();
        let (topic, key, value) = (topic.to_string(), key.to_string(), value.to_vec());

        tokio::task::spawn_blocking(move || this.send_message(&topic, &key, &value))
            .await
            .map_err(|e| ServiceError::Internal(format!("Kafka publish task failed: {e}")))?
            .map_err(ServiceError::from)
    }
}
