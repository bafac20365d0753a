use crate::abstract_trait::DynEmailService;
use rdkafka::{Message, message::BorrowedMessage};
use shared::{domain::EmailRequest, errors::ServiceError};
use tracing::{error, info};

/// Turns queued confirmation payloads into outgoing mail.
pub struct EmailHandler {
    mailer: DynEmailService,
}

impl EmailHandler {
    pub fn new(mailer: DynEmailService) -> Self {
        Self { mailer }
    }

    pub async fn handle_message(&self, message: &BorrowedMessage<'_>) -> Result<(), ServiceError> {
        let payload = message
            .payload()
            .ok_or_else(|| ServiceError::Custom("Empty message payload".to_string()))?;

        self.handle_payload(payload).await
    }

    pub async fn handle_payload(&self, payload: &[u8]) -> Result<(), ServiceError> {
        let request: EmailRequest = serde_json::from_slice(payload).map_err(|e| {
            error!(
                "❌ Failed to decode email payload: {e}, payload: {}",
                String::from_utf8_lossy(payload)
            );
            ServiceError::Custom(format!("Invalid JSON payload: {e}"))
        })?;

        if request.to.trim().is_empty() {
            return Err(ServiceError::Custom("Email payload has no recipient".into()));
        }

        self.mailer.send(&request).await?;

        info!("📨 Delivered '{}' to {}", request.subject, request.to);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abstract_trait::EmailServiceTrait;
    use async_trait::async_trait;
    use shared::domain::EmailTemplateData;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct RecordingMailer {
        sent: Mutex<Vec<EmailRequest>>,
    }

    #[async_trait]
    impl EmailServiceTrait for RecordingMailer {
        async fn send(&self, req: &EmailRequest) -> Result<(), ServiceError> {
            self.sent.lock().unwrap().push(req.clone());
            Ok(())
        }
    }

    fn confirmation(to: &str) -> EmailRequest {
        EmailRequest {
            to: to.into(),
            subject: "Order Confirmation".into(),
            data: EmailTemplateData {
                title: "Order Confirmation".into(),
                message: "Dear alice,".into(),
                button: "View my orders".into(),
                link: "http://shop.test/order/my-orders/".into(),
            },
        }
    }

    #[tokio::test]
    async fn valid_payload_is_sent() {
        let mailer = Arc::new(RecordingMailer::default());
        let handler = EmailHandler::new(mailer.clone());

        let payload = serde_json::to_vec(&confirmation("alice@example.com")).unwrap();
        handler.handle_payload(&payload).await.unwrap();

        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0], confirmation("alice@example.com"));
    }

    #[tokio::test]
    async fn garbage_and_recipientless_payloads_are_dropped() {
        let mailer = Arc::new(RecordingMailer::default());
        let handler = EmailHandler::new(mailer.clone());

        assert!(handler.handle_payload(b"not json").await.is_err());

        let payload = serde_json::to_vec(&confirmation(" ")).unwrap();
        assert!(handler.handle_payload(&payload).await.is_err());

        assert!(mailer.sent.lock().unwrap().is_empty());
    }
}
