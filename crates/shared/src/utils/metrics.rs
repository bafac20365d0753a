use prometheus_client::metrics::histogram::Histogram;
use prometheus_client::metrics::{counter::Counter, family::Family, gauge::Gauge};
use prometheus_client::registry::Registry;
use prometheus_client_derive_encode::{EncodeLabelSet, EncodeLabelValue};
use std::{
    sync::Arc,
    time::{Duration, SystemTime, UNIX_EPOCH},
};
use sysinfo::{Pid, ProcessesToUpdate, System};
use tokio::sync::Mutex;

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Status {
    Success,
    Error,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct Labels {
    pub method: Method,
    pub status: Status,
}

/// Per-service request counter and latency histogram.
#[derive(Clone, Debug)]
pub struct Metrics {
    pub request_counter: Family<Labels, Counter>,
    pub request_duration: Family<Labels, Histogram>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            request_counter: Family::default(),
            request_duration: Family::new_with_constructor(|| {
                Histogram::new(
                    [0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0].into_iter(),
                )
            }),
        }
    }

    /// Registers both families as `<prefix>_requests` and `<prefix>_request_duration_seconds`.
    pub fn register(&self, registry: &mut Registry, prefix: &str, service: &str) {
        registry.register(
            format!("{prefix}_requests"),
            format!("Total number of requests handled by the {service}"),
            self.request_counter.clone(),
        );
        registry.register(
            format!("{prefix}_request_duration_seconds"),
            format!("Request durations for the {service}"),
            self.request_duration.clone(),
        );
    }

    pub fn record(&self, method: Method, status: Status, duration_secs: f64) {
        let labels = Labels { method, status };
        self.request_counter.get_or_create(&labels).inc();
        self.request_duration
            .get_or_create(&labels)
            .observe(duration_secs);
    }
}

#[derive(Debug, Clone)]
pub struct SystemMetrics {
    pub resident_memory_bytes: Gauge,
    pub virtual_memory_bytes: Gauge,
    pub available_memory_bytes: Gauge,
    pub cpu_usage_percent: Gauge,
    pub process_start_time: Gauge,
    sys: Arc<Mutex<System>>,
}

impl Default for SystemMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemMetrics {
    pub fn new() -> Self {
        let start_time = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or_default();

        let metrics = Self {
            resident_memory_bytes: Gauge::default(),
            virtual_memory_bytes: Gauge::default(),
            available_memory_bytes: Gauge::default(),
            cpu_usage_percent: Gauge::default(),
            process_start_time: Gauge::default(),
            sys: Arc::new(Mutex::new(System::new())),
        };

        metrics.process_start_time.set(start_time);
        metrics
    }

    pub fn register(&self, registry: &mut Registry) {
        registry.register(
            "process_resident_memory_bytes",
            "Resident memory of this process in bytes",
            self.resident_memory_bytes.clone(),
        );
        registry.register(
            "process_virtual_memory_bytes",
            "Virtual memory of this process in bytes",
            self.virtual_memory_bytes.clone(),
        );
        registry.register(
            "system_available_memory_bytes",
            "Memory available on the host in bytes",
            self.available_memory_bytes.clone(),
        );
        registry.register(
            "system_cpu_usage_percent",
            "Global CPU usage in percent",
            self.cpu_usage_percent.clone(),
        );
        registry.register(
            "process_start_time_seconds",
            "Start time of the process since unix epoch in seconds",
            self.process_start_time.clone(),
        );
    }

    pub async fn update_metrics(&self) {
        let mut sys = self.sys.lock().await;
        let pid = Pid::from_u32(std::process::id());

        sys.refresh_memory();
        sys.refresh_cpu_usage();
        sys.refresh_processes(ProcessesToUpdate::Some(&[pid]), true);

        self.available_memory_bytes
            .set(sys.available_memory() as i64);
        self.cpu_usage_percent.set(sys.global_cpu_usage() as i64);

        if let Some(process) = sys.process(pid) {
            self.resident_memory_bytes.set(process.memory() as i64);
            self.virtual_memory_bytes
                .set(process.virtual_memory() as i64);
        }
    }
}

pub async fn run_metrics_collector(system_metrics: Arc<SystemMetrics>) {
    let mut interval = tokio::time::interval(Duration::from_secs(15));
    loop {
        interval.tick().await;
        system_metrics.update_metrics().await;
    }
}
