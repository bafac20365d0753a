use anyhow::{Context, Result};

#[derive(Clone)]
pub struct Config {
    pub smtp_server: String,
    pub smtp_port: u16,
    pub smtp_user: String,
    pub smtp_pass: String,
    pub from_address: String,
    pub kafka_broker: String,
    pub group_id: String,
    pub otel_endpoint: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("smtp_server", &self.smtp_server)
            .field("smtp_port", &self.smtp_port)
            .field("smtp_user", &self.smtp_user)
            .field("smtp_pass", &"<redacted>")
            .field("from_address", &self.from_address)
            .field("kafka_broker", &self.kafka_broker)
            .field("group_id", &self.group_id)
            .finish()
    }
}

impl Config {
    pub fn init() -> Result<Self> {
        let smtp_user =
            std::env::var("SMTP_USERNAME").context("Missing environment variable: SMTP_USERNAME")?;
        let smtp_pass =
            std::env::var("SMTP_PASSWORD").context("Missing environment variable: SMTP_PASSWORD")?;
        let smtp_server =
            std::env::var("SMTP_HOST").context("Missing environment variable: SMTP_HOST")?;
        let smtp_port = std::env::var("SMTP_PORT")
            .unwrap_or_else(|_| "587".to_string())
            .parse::<u16>()
            .context("SMTP_PORT must be a valid u16 integer")?;

        let from_address =
            std::env::var("EMAIL_FROM").unwrap_or_else(|_| "no-reply@phoneshop.local".to_string());

        let kafka_broker = std::env::var("KAFKA").context("Missing environment variable: KAFKA")?;
        let group_id =
            std::env::var("KAFKA_GROUP_ID").unwrap_or_else(|_| "email-service-group".to_string());

        let otel_endpoint = std::env::var("OTEL_ENDPOINT")
            .unwrap_or_else(|_| "http://otel-collector:4317".to_string());

        Ok(Self {
            smtp_server,
            smtp_port,
            smtp_user,
            smtp_pass,
            from_address,
            kafka_broker,
            group_id,
            otel_endpoint,
        })
    }
}
