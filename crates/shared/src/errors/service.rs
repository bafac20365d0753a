use crate::errors::repository::RepositoryError;
use bcrypt::BcryptError;
use jsonwebtoken::errors::Error as JwtError;
use rdkafka::error::KafkaError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepositoryError),

    #[error("{0}")]
    NotFound(String),

    #[error("Not enough stock for this variant.")]
    InsufficientStock,

    #[error("Invalid or expired discount code.")]
    InvalidDiscount,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("Password hashing error: {0}")]
    Bcrypt(#[from] BcryptError),

    #[error("JWT error: {0}")]
    Jwt(#[from] JwtError),

    #[error("Kafka error: {0}")]
    Kafka(String),

    #[error("Payment gateway error: {0}")]
    Payment(String),

    #[error("Token has expired")]
    TokenExpired,

    #[error("Invalid Token")]
    InvalidTokenType,

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Custom error: {0}")]
    Custom(String),
}

impl ServiceError {
    pub fn validation(message: impl Into<String>) -> Self {
        ServiceError::Validation(vec![message.into()])
    }
}

impl From<KafkaError> for ServiceError {
    fn from(error: KafkaError) -> Self {
        ServiceError::Kafka(error.to_string())
    }
}
