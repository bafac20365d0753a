use crate::utils::metrics::{Method, Metrics, Status};
use anyhow::{Context as _, Result};
use opentelemetry::{
    Context, KeyValue, global,
    trace::{Span, SpanKind, Status as SpanStatus, TraceContextExt, Tracer},
};
use opentelemetry_otlp::{LogExporter, MetricExporter, SpanExporter, WithExportConfig};
use opentelemetry_sdk::{
    Resource, logs::SdkLoggerProvider, metrics::SdkMeterProvider, trace::SdkTracerProvider,
};
use tokio::time::Instant;
use tracing::{error, info};

/// Owns the OTLP providers for one binary so they can be flushed on shutdown.
pub struct Telemetry {
    service_name: String,
    otel_endpoint: String,
    tracer: Option<SdkTracerProvider>,
    meter: Option<SdkMeterProvider>,
    logger: Option<SdkLoggerProvider>,
}

impl Telemetry {
    pub fn new(service_name: impl Into<String>, otel_endpoint: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            otel_endpoint: otel_endpoint.into(),
            tracer: None,
            meter: None,
            logger: None,
        }
    }

    fn resource(&self) -> Resource {
        Resource::builder()
            .with_service_name(self.service_name.clone())
            .build()
    }

    pub fn init_tracer(&mut self) -> Result<()> {
        let exporter = SpanExporter::builder()
            .with_tonic()
            .with_endpoint(self.otel_endpoint.clone())
            .build()
            .context("Failed to create span exporter")?;

        let provider = SdkTracerProvider::builder()
            .with_resource(self.resource())
            .with_batch_exporter(exporter)
            .build();

        global::set_tracer_provider(provider.clone());
        self.tracer = Some(provider);

        Ok(())
    }

    pub fn init_meter(&mut self) -> Result<()> {
        let exporter = MetricExporter::builder()
            .with_tonic()
            .with_endpoint(self.otel_endpoint.clone())
            .build()
            .context("Failed to create metric exporter")?;

        let provider = SdkMeterProvider::builder()
            .with_resource(self.resource())
            .with_periodic_exporter(exporter)
            .build();

        global::set_meter_provider(provider.clone());
        self.meter = Some(provider);

        Ok(())
    }

    pub fn init_logger(&mut self) -> Result<SdkLoggerProvider> {
        let exporter = LogExporter::builder()
            .with_tonic()
            .with_endpoint(self.otel_endpoint.clone())
            .build()
            .context("Failed to create log exporter")?;

        let provider = SdkLoggerProvider::builder()
            .with_resource(self.resource())
            .with_batch_exporter(exporter)
            .build();

        self.logger = Some(provider.clone());

        Ok(provider)
    }

    pub fn shutdown(self) -> Result<()> {
        let mut errors = Vec::new();

        if let Some(tracer) = self.tracer
            && let Err(e) = tracer.shutdown()
        {
            errors.push(format!("tracer provider: {e}"));
        }
        if let Some(meter) = self.meter
            && let Err(e) = meter.shutdown()
        {
            errors.push(format!("meter provider: {e}"));
        }
        if let Some(logger) = self.logger
            && let Err(e) = logger.shutdown()
        {
            errors.push(format!("logger provider: {e}"));
        }

        if !errors.is_empty() {
            anyhow::bail!("Failed to shutdown providers:\n{}", errors.join("\n"));
        }

        Ok(())
    }
}

pub struct TracingContext {
    pub cx: Context,
    pub start_time: Instant,
}

/// Span plus request metrics around a single service operation.
#[derive(Clone, Debug)]
pub struct ServiceTracing {
    tracer_name: &'static str,
    metrics: Metrics,
}

impl ServiceTracing {
    pub fn new(tracer_name: &'static str, metrics: Metrics) -> Self {
        Self {
            tracer_name,
            metrics,
        }
    }

    pub fn start(&self, operation_name: &str, attributes: Vec<KeyValue>) -> TracingContext {
        let start_time = Instant::now();
        let tracer = global::tracer(self.tracer_name);

        let mut span = tracer
            .span_builder(operation_name.to_string())
            .with_kind(SpanKind::Server)
            .with_attributes(attributes)
            .start(&tracer);

        info!("Starting operation: {operation_name}");

        span.add_event(
            "Operation started",
            vec![KeyValue::new("operation", operation_name.to_string())],
        );

        TracingContext {
            cx: Context::current_with_span(span),
            start_time,
        }
    }

    pub fn success(&self, tracing_ctx: &TracingContext, method: Method, message: &str) {
        self.complete(tracing_ctx, method, true, message);
    }

    pub fn failure(&self, tracing_ctx: &TracingContext, method: Method, message: &str) {
        self.complete(tracing_ctx, method, false, message);
    }

    /// Closes the span with the outcome of `result` and hands it back unchanged.
    pub fn finish<T, E: std::fmt::Display>(
        &self,
        tracing_ctx: &TracingContext,
        method: Method,
        message: &str,
        result: Result<T, E>,
    ) -> Result<T, E> {
        match &result {
            Ok(_) => self.success(tracing_ctx, method, message),
            Err(e) => self.failure(tracing_ctx, method, &e.to_string()),
        }
        result
    }

    fn complete(&self, tracing_ctx: &TracingContext, method: Method, ok: bool, message: &str) {
        let elapsed = tracing_ctx.start_time.elapsed().as_secs_f64();
        let span = tracing_ctx.cx.span();

        span.add_event(
            "Operation completed",
            vec![
                KeyValue::new("status", if ok { "SUCCESS" } else { "ERROR" }),
                KeyValue::new("duration_secs", elapsed.to_string()),
                KeyValue::new("message", message.to_string()),
            ],
        );

        if ok {
            info!("✅ Operation completed successfully: {message}");
            self.metrics.record(method, Status::Success, elapsed);
        } else {
            error!("❌ Operation failed: {message}");
            span.set_status(SpanStatus::error(message.to_string()));
            self.metrics.record(method, Status::Error, elapsed);
        }

        span.end();
    }
}
