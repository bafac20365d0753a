use crate::{abstract_trait::HashingTrait, errors::ServiceError};
use async_trait::async_trait;
use bcrypt::{DEFAULT_COST, hash, verify};
use tokio::task;

/// bcrypt with a configurable cost; work runs on the blocking pool.
#[derive(Clone, Debug)]
pub struct Hashing {
    cost: u32,
}

impl Hashing {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for Hashing {
    fn default() -> Self {
        Self::new(DEFAULT_COST)
    }
}

#[async_trait]
impl HashingTrait for Hashing {
    async fn hash_password(&self, password: &str) -> Result<String, ServiceError> {
        let password = password.to_owned();
        let cost = self.cost;

        task::spawn_blocking(move || hash(password, cost))
            .await
            .map_err(|e| ServiceError::Internal(format!("hashing task failed: {e}")))?
            .map_err(ServiceError::from)
    }

    async fn verify_password(&self, password: &str, hashed: &str) -> Result<bool, ServiceError> {
        let password = password.to_owned();
        let hashed = hashed.to_owned();

        task::spawn_blocking(move || verify(password, &hashed))
            .await
            .map_err(|e| ServiceError::Internal(format!("hashing task failed: {e}")))?
            .map_err(ServiceError::from)
    }
}
