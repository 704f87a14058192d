//! OpenTelemetry-based observability with file-based trace export.
//!
//! Every failure path in the plugin degrades silently from the user's point
//! of view; traces are the only place those failures show up. Spans emitted
//! through `tracing` flow into the OpenTelemetry SDK and out through a
//! custom exporter that appends OTLP JSON lines to a rotating file in the
//! plugin's writable data directory:
//!
//! ```text
//! tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → ztube-otlp.json
//! ```
//!
//! The trace level comes from the `trace_level` plugin configuration key and
//! defaults to `info`.
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - [`tracer`]: File-backed span exporter and tracer provider
//! - [`otlp`]: OTLP JSON encoding of span batches
//! - [`trace_log`]: Append-only trace file with size-based rotation

mod init;
mod otlp;
mod trace_log;
mod tracer;

pub use init::init_tracing;
