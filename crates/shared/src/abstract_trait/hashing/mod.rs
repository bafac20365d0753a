use crate::errors::ServiceError;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynHashing = Arc<dyn HashingTrait + Send + Sync>;

#[async_trait]
pub trait HashingTrait {
    async fn hash_password(&self, password: &str) -> Result<String, ServiceError>;
    async fn verify_password(&self, password: &str, hashed: &str) -> Result<bool, ServiceError>;
}
