use crate::config::momo::MomoConfig;
use anyhow::{Context, Result, anyhow};
use shared::config::RedisConfig;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub run_migrations: bool,
    pub port: u16,
    pub kafka_broker: String,
    pub db_max_conn: u32,
    pub db_min_conn: u32,
    pub redis: RedisConfig,
    pub otel_endpoint: String,
    pub shop_url: String,
    pub momo: MomoConfig,
}

impl Config {
    pub fn init() -> Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("Missing environment variable: DATABASE_URL")?;
        let jwt_secret =
            std::env::var("JWT_SECRET").context("Missing environment variable: JWT_SECRET")?;
        let run_migrations_str = std::env::var("RUN_MIGRATIONS")
            .context("Missing environment variable: RUN_MIGRATIONS")?;
        let port_str = std::env::var("PORT").context("Missing environment variable: PORT")?;

        let kafka_broker = std::env::var("KAFKA").context("Missing environment variable: KAFKA")?;

        let run_migrations = parse_flag("RUN_MIGRATIONS", &run_migrations_str)?;

        let db_max_conn: u32 = std::env::var("DB_MAX_CONNECTION")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<u32>()
            .context("Unable to parse DB_MAX_CONNECTION as u32")?;

        let db_min_conn: u32 = std::env::var("DB_MIN_CONNECTION")
            .unwrap_or_else(|_| "1".to_string())
            .parse::<u32>()
            .context("Unable to parse DB_MIN_CONNECTION as u32")?;

        let port = port_str
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        // redis
        let redis_host = std::env::var("REDIS_HOST").unwrap_or_else(|_| "redis".to_string());
        let redis_port = std::env::var("REDIS_PORT")
            .unwrap_or_else(|_| "6379".to_string())
            .parse::<u16>()
            .context("REDIS_PORT must be a valid u16 integer")?;
        let redis_db = std::env::var("REDIS_DB")
            .unwrap_or_else(|_| "0".to_string())
            .parse::<u8>()
            .context("REDIS_DB must be a valid u8 integer")?;
        let redis_password = std::env::var("REDIS_PASSWORD")
            .ok()
            .filter(|pw| !pw.is_empty());

        let otel_endpoint = std::env::var("OTEL_ENDPOINT")
            .unwrap_or_else(|_| "http://otel-collector:4317".to_string());

        let shop_url = std::env::var("SHOP_URL")
            .unwrap_or_else(|_| "http://localhost:8000".to_string())
            .trim_end_matches('/')
            .to_string();

        let momo = MomoConfig::init().context("Failed to load MoMo configuration")?;

        Ok(Self {
            database_url,
            jwt_secret,
            run_migrations,
            port,
            kafka_broker,
            db_max_conn,
            db_min_conn,
            redis: RedisConfig::new(redis_host, redis_port, redis_db, redis_password),
            otel_endpoint,
            shop_url,
            momo,
        })
    }
}

impl Config {
    /// Link placed in the confirmation email.
    pub fn orders_link(&self) -> String {
        format!("{}/order/my-orders/", self.shop_url)
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(anyhow!("{name} must be 'true' or 'false', got '{other}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_accept_only_literal_booleans() {
        assert!(parse_flag("RUN_MIGRATIONS", "true").unwrap());
        assert!(!parse_flag("RUN_MIGRATIONS", "false").unwrap());

        let err = parse_flag("RUN_MIGRATIONS", "yes").unwrap_err();
        assert!(err.to_string().contains("RUN_MIGRATIONS"));
    }
}
