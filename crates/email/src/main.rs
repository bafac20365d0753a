use anyhow::{Context, Result};
use email::{app::EmailServiceApp, config::Config};
use shared::utils::{Telemetry, init_logger};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let is_dev = std::env::var("DEV_MODE")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);
    let is_enable_file = std::env::var("ENABLE_FILE_LOG")
        .map(|v| v == "true")
        .unwrap_or(false);

    let config = Config::init().context("Failed to load configuration")?;

    let mut telemetry = Telemetry::new("email-service", config.otel_endpoint.clone());
    let logger_provider = telemetry.init_logger()?;
    telemetry.init_meter()?;
    telemetry.init_tracer()?;

    init_logger(logger_provider, "email-service", is_dev, is_enable_file);

    info!("Loaded configuration: {config:?}");

    let app = EmailServiceApp::new(&config)?;
    app.run().await;

    if let Err(e) = telemetry.shutdown() {
        error!("Failed to shutdown telemetry: {e}");
    }

    info!("✅ Email Service shutdown gracefully.");
    Ok(())
}
