use crate::config::RedisConfig;
use chrono::Duration;
use deadpool_redis::{Connection, Pool};
use serde::{Serialize, de::DeserializeOwned};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// JSON read-through cache on top of redis. Every failure degrades to a miss.
#[derive(Clone)]
pub struct CacheStore {
    redis_pool: Arc<Pool>,
}

impl CacheStore {
    pub fn new(redis_pool: Pool) -> Self {
        Self {
            redis_pool: Arc::new(redis_pool),
        }
    }

    pub fn from_config(config: &RedisConfig) -> anyhow::Result<Self> {
        Ok(Self::new(config.create_pool()?))
    }

    async fn get_conn(&self) -> Option<Connection> {
        match self.redis_pool.get().await {
            Ok(conn) => Some(conn),
            Err(e) => {
                warn!("Redis unavailable, skipping cache: {e}");
                None
            }
        }
    }

    pub async fn get_from_cache<T>(&self, key: &str) -> Option<T>
    where
        T: DeserializeOwned,
    {
        let mut conn = self.get_conn().await?;

        let raw: Option<String> = match redis::cmd("GET").arg(key).query_async(&mut conn).await {
            Ok(raw) => raw,
            Err(e) => {
                error!("Redis GET failed for '{key}': {e:?}");
                return None;
            }
        };

        let Some(raw) = raw else {
            debug!("Cache miss for key: {key}");
            return None;
        };

        serde_json::from_str::<T>(&raw)
            .inspect_err(|e| error!("Discarding undecodable cache entry '{key}': {e:?}"))
            .ok()
    }

    pub async fn set_to_cache<T>(&self, key: &str, data: &T, expiration: Duration)
    where
        T: Serialize,
    {
        let payload = match serde_json::to_string(data) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize cache value for '{key}': {e:?}");
                return;
            }
        };

        let Some(mut conn) = self.get_conn().await else {
            return;
        };

        let result: redis::RedisResult<()> = redis::cmd("SET")
            .arg(key)
            .arg(&payload)
            .arg("EX")
            .arg(expiration.num_seconds().max(1))
            .query_async(&mut conn)
            .await;

        match result {
            Ok(()) => debug!("Cached '{key}' for {}s", expiration.num_seconds()),
            Err(e) => error!("Redis SET failed for '{key}': {e:?}"),
        }
    }

    pub async fn delete_from_cache(&self, key: &str) {
        if let Some(mut conn) = self.get_conn().await
            && let Err(e) = redis::cmd("DEL")
                .arg(key)
                .query_async::<()>(&mut conn)
                .await
        {
            error!("Redis DEL failed for '{key}': {e:?}");
        }
    }
}
