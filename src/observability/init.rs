//! Tracing initialization and subscriber setup.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Writable plugin data directory inside the Zellij sandbox.
const DATA_DIR: &str = "/data";

/// Name of the OTLP trace file inside [`DATA_DIR`].
const TRACE_FILE: &str = "ztube-otlp.json";

/// Initializes the tracing subscriber with file-based OTLP export.
///
/// Builds the full pipeline: an `EnvFilter` at the configured trace level,
/// an OpenTelemetry layer, and the file exporter writing to
/// `/data/ztube-otlp.json`.
///
/// Observability is optional: if the data directory cannot be created the
/// function returns without installing a subscriber, and repeated calls
/// after the first are no-ops.
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = std::path::PathBuf::from(DATA_DIR);
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new("service.name", "ztube")]);

    let provider = tracer::create_tracer_provider(data_dir.join(TRACE_FILE), resource);

    let tracer = provider.tracer("ztube");
    let otel_layer = OpenTelemetryLayer::new(tracer);

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer);

    let _ = subscriber.try_init();
}
