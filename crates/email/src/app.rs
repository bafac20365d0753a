use crate::{
    abstract_trait::DynEmailService,
    config::Config,
    handler::EmailHandler,
    service::{EmailService, KafkaEmailService},
};
use anyhow::{Context, Result};
use shared::{
    domain::{ORDER_CONFIRMATION_TOPIC, USER_REGISTERED_TOPIC},
    utils::shutdown_signal,
};
use std::sync::Arc;
use tracing::info;

pub struct EmailServiceApp {
    consumer: KafkaEmailService,
}

impl EmailServiceApp {
    pub fn new(config: &Config) -> Result<Self> {
        let email_service =
            Arc::new(EmailService::new(config).context("Failed to configure SMTP")?)
                as DynEmailService;

        let handler = EmailHandler::new(email_service);

        let consumer = KafkaEmailService::new(
            &config.kafka_broker,
            &config.group_id,
            &[ORDER_CONFIRMATION_TOPIC, USER_REGISTERED_TOPIC],
            handler,
        )
        .context("Failed to create Kafka consumer")?;

        Ok(Self { consumer })
    }

    pub async fn run(self) {
        info!("🚀 Starting Email Service...");
        self.consumer.start_consuming(shutdown_signal()).await;
    }
}
