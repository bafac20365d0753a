use anyhow::{Context, Result};
use shared::{
    abstract_trait::{DynHashing, DynKafka},
    cache::CacheStore,
    config::{ConnectionManager, ConnectionPool, Hashing, Kafka},
    utils::{Telemetry, init_logger},
};
use shop::{
    abstract_trait::{cache::DynCatalogCache, payment::DynPaymentGateway},
    cache::CatalogCache,
    config::myconfig::Config,
    di::DependenciesInjectDeps,
    handler::AppRouter,
    payment::MomoClient,
    state::AppState,
};
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    let (config, state, telemetry) = setup().await.context("Failed to setup application")?;

    AppRouter::serve(config.port, state)
        .await
        .context("Failed to start server")?;

    info!("🛑 Shutting down shop service...");

    if let Err(e) = telemetry.shutdown() {
        error!("Failed to shutdown telemetry: {e}");
    }

    Ok(())
}

async fn setup() -> Result<(Config, AppState, Telemetry)> {
    dotenv::dotenv().ok();

    let is_dev = std::env::var("DEV_MODE")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);
    let is_enable_file = std::env::var("ENABLE_FILE_LOG")
        .map(|v| v == "true")
        .unwrap_or(false);

    let config = Config::init().context("Failed to load configuration")?;

    let mut telemetry = Telemetry::new("shop-service", config.otel_endpoint.clone());
    let logger_provider = telemetry.init_logger()?;
    telemetry.init_meter()?;
    telemetry.init_tracer()?;

    init_logger(logger_provider, "shop-service", is_dev, is_enable_file);

    info!("Configuration loaded, listening port {}", config.port);

    let db_pool = ConnectionManager::new_pool(
        &config.database_url,
        config.db_min_conn,
        config.db_max_conn,
    )
    .await
    .context("Failed to initialize database pool")?;

    if config.run_migrations {
        run_migrations(&db_pool)
            .await
            .context("Failed to migrate database")?;
    }

    let kafka = Arc::new(Kafka::new(&config.kafka_broker)?) as DynKafka;

    let store = CacheStore::from_config(&config.redis).context("Failed to configure redis")?;
    let cache = Arc::new(CatalogCache::new(Arc::new(store))) as DynCatalogCache;

    let payment = Arc::new(
        MomoClient::new(config.momo.clone()).context("Failed to build MoMo client")?,
    ) as DynPaymentGateway;

    let deps = DependenciesInjectDeps::from_pool(
        db_pool,
        payment,
        kafka,
        cache,
        Arc::new(Hashing::default()) as DynHashing,
        config.orders_link(),
        config.shop_url.clone(),
    );

    let state = AppState::new(deps, &config.jwt_secret);

    info!("✅ Application setup completed successfully.");
    Ok((config, state, telemetry))
}

async fn run_migrations(pool: &ConnectionPool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("✅ Migrations applied");

    Ok(())
}
