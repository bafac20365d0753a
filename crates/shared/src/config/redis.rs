use anyhow::{Context, Result};
use deadpool_redis::{Config as PoolConfig, Pool, Runtime};
use tracing::info;

#[derive(Debug, Clone)]
pub struct RedisConfig {
    pub host: String,
    pub port: u16,
    pub db: u8,
    pub password: Option<String>,
}

impl RedisConfig {
    pub fn new(host: String, port: u16, db: u8, password: Option<String>) -> Self {
        Self {
            host,
            port,
            db,
            password,
        }
    }

    pub fn url(&self) -> String {
        match &self.password {
            Some(pw) => format!("redis://:{}@{}:{}/{}", pw, self.host, self.port, self.db),
            None => format!("redis://{}:{}/{}", self.host, self.port, self.db),
        }
    }

    /// Builds the pool lazily; no connection is opened until the first checkout.
    pub fn create_pool(&self) -> Result<Pool> {
        info!("Creating redis pool for {}:{}/{}", self.host, self.port, self.db);

        PoolConfig::from_url(self.url())
            .create_pool(Some(Runtime::Tokio1))
            .context("Failed to create redis pool")
    }
}
