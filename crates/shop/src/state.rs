use crate::di::{DependenciesInject, DependenciesInjectDeps};
use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::DynJwtService,
    config::JwtConfig,
    utils::{SystemMetrics, run_metrics_collector},
};
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub jwt_config: DynJwtService,
    pub registry: Arc<Mutex<Registry>>,
    pub system_metrics: Arc<SystemMetrics>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("deps", &self.di_container)
            .field("jwt_config", &self.jwt_config)
            .field("system_metrics", &self.system_metrics)
            .finish()
    }
}

impl AppState {
    /// Must be called inside a tokio runtime; it starts the system metrics collector.
    pub fn new(deps: DependenciesInjectDeps, jwt_secret: &str) -> Self {
        let jwt_config = Arc::new(JwtConfig::new(jwt_secret)) as DynJwtService;
        let mut registry = Registry::default();
        let system_metrics = Arc::new(SystemMetrics::new());

        let di_container = DependenciesInject::new(deps, &mut registry);

        registry.register_metrics(&system_metrics);

        tokio::spawn(run_metrics_collector(system_metrics.clone()));

        Self {
            di_container,
            jwt_config,
            registry: Arc::new(Mutex::new(registry)),
            system_metrics,
        }
    }
}

trait MetricsRegister {
    fn register_metrics(&mut self, metrics: &SystemMetrics);
}

impl MetricsRegister for Registry {
    fn register_metrics(&mut self, metrics: &SystemMetrics) {
        metrics.register(self);
    }
}
