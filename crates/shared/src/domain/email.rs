use serde::{Deserialize, Serialize};

/// Topic the shop publishes confirmations to and the email worker consumes.
pub const ORDER_CONFIRMATION_TOPIC: &str = "email-service-topic-order-confirmation";

/// Welcome mails for freshly registered users.
pub const USER_REGISTERED_TOPIC: &str = "email-service-topic-user-register";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailTemplateData {
    pub title: String,
    pub message: String,
    pub button: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailRequest {
    pub to: String,
    pub subject: String,
    pub data: EmailTemplateData,
}
