use opentelemetry_appender_tracing::layer::OpenTelemetryTracingBridge;
use opentelemetry_sdk::logs::SdkLoggerProvider;
use tracing::level_filters::LevelFilter;
use tracing_appender::{
    non_blocking,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, Layer, filter::Directive, fmt, prelude::*};

/// Installs the global subscriber: console, optional JSON file, and the OTLP log bridge.
pub fn init_logger(
    sdk_logger_provider: SdkLoggerProvider,
    component: &str,
    is_dev: bool,
    enable_file: bool,
) {
    let default_level = if is_dev { "debug" } else { "info" };

    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let console_layer = fmt::layer()
        .pretty()
        .with_thread_names(true)
        .with_ansi(is_dev)
        .with_filter(console_filter);

    let file_layer = if enable_file {
        let log_dir = if is_dev { "./logs" } else { "/var/log/app" };
        let file_appender =
            RollingFileAppender::new(Rotation::DAILY, log_dir, format!("{component}.log"));
        let (file_writer, guard) = non_blocking(file_appender);

        // the worker must outlive main's scope
        std::mem::forget(guard);

        Some(
            fmt::layer()
                .with_writer(file_writer)
                .with_ansi(false)
                .json()
                .with_filter(LevelFilter::INFO),
        )
    } else {
        None
    };

    let otel_filter = EnvFilter::new("info")
        .add_directive(silence("hyper"))
        .add_directive(silence("opentelemetry"))
        .add_directive(silence("tonic"))
        .add_directive(silence("h2"))
        .add_directive(silence("reqwest"))
        .add_directive(silence("rdkafka"));

    let otel_layer = OpenTelemetryTracingBridge::new(&sdk_logger_provider).with_filter(otel_filter);

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .with(otel_layer)
        .init();
}

fn silence(target: &str) -> Directive {
    format!("{target}=off")
        .parse()
        .unwrap_or_else(|_| LevelFilter::INFO.into())
}
