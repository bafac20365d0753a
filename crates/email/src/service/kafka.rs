use crate::handler::EmailHandler;
use rdkafka::{
    config::ClientConfig,
    consumer::{CommitMode, Consumer, StreamConsumer},
};
use shared::errors::ServiceError;
use std::future::Future;
use tokio::time::{Duration, sleep};
use tracing::{error, info, warn};

pub struct KafkaEmailService {
    consumer: StreamConsumer,
    handler: EmailHandler,
}

impl KafkaEmailService {
    pub fn new(
        brokers: &str,
        group_id: &str,
        topics: &[&str],
        handler: EmailHandler,
    ) -> Result<Self, ServiceError> {
        let consumer: StreamConsumer = ClientConfig::new()
            .set("bootstrap.servers", brokers)
            .set("group.id", group_id)
            .set("enable.partition.eof", "false")
            .set("session.timeout.ms", "6000")
            .set("enable.auto.commit", "true")
            .set("auto.offset.reset", "earliest")
            .set("allow.auto.create.topics", "true")
            .create()?;

        consumer.subscribe(topics)?;
        info!("📥 Subscribed to {topics:?} as group '{group_id}'");

        Ok(Self { consumer, handler })
    }

    /// Consumes until `shutdown` resolves. Undeliverable messages are logged and committed.
    pub async fn start_consuming(&self, shutdown: impl Future<Output = ()>) {
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    info!("🛑 Stopping Kafka consumer");
                    return;
                }
                received = self.consumer.recv() => match received {
                    Err(e) => {
                        warn!("⚠️ Kafka not connected or error: {e:?}");
                        sleep(Duration::from_secs(5)).await;
                    }
                    Ok(message) => {
                        if let Err(e) = self.handler.handle_message(&message).await {
                            error!("❌ Failed to handle message: {e}");
                        }

                        if let Err(e) = self.consumer.commit_message(&message, CommitMode::Async) {
                            error!("❌ Failed to commit message: {e:?}");
                        }
                    }
                },
            }
        }
    }
}
