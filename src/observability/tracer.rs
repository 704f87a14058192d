//! File-backed span exporter and tracer provider.
//!
//! Implements a custom `SpanExporter` that writes spans to a rotating JSON
//! file instead of sending them over the network; inside the Zellij sandbox
//! there is no collector to send to, and the file supports offline analysis.

use super::otlp;
use super::trace_log::TraceLog;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

/// Span exporter appending OTLP JSON batches to a [`TraceLog`].
#[derive(Debug)]
struct FileSpanExporter {
    log: TraceLog,
    resource: Resource,
    is_shutdown: AtomicBool,
}

impl SpanExporter for FileSpanExporter {
    /// Writes one batch as a single OTLP JSON line.
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        if self.is_shutdown.load(Ordering::SeqCst) {
            return Box::pin(std::future::ready(Err(TraceError::from(
                "exporter is shut down",
            ))));
        }

        let line = otlp::encode_batch(&self.resource, &batch).to_string();
        let result = self
            .log
            .append(&line)
            .map_err(|e| TraceError::from(e.to_string()));

        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }

    fn set_resource(&mut self, resource: &Resource) {
        self.resource = resource.clone();
    }
}

/// Creates a tracer provider that exports spans to `file_path`.
///
/// Uses the simple (immediate, non-batched) export strategy; the plugin is
/// event-driven and span volume is low.
pub fn create_tracer_provider(file_path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = FileSpanExporter {
        log: TraceLog::new(file_path),
        resource: resource.clone(),
        is_shutdown: AtomicBool::new(false),
    };

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
