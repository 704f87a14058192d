//! OTLP JSON encoding of span batches.
//!
//! Converts OpenTelemetry span data into OTLP (OpenTelemetry Protocol) JSON
//! documents, one per exported batch. The output loads directly into OTLP
//! trace viewers.

use opentelemetry::trace::{SpanId, SpanKind, Status};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::SpanData;
use opentelemetry_sdk::resource::Resource;
use serde_json::{json, Value as JsonValue};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Encodes a batch of spans as a complete OTLP JSON document.
///
/// The document carries a single `resourceSpans` entry with the resource
/// attributes, one `scopeSpans` entry for the `ztube` scope, and the encoded
/// spans.
pub fn encode_batch(resource: &Resource, batch: &[SpanData]) -> JsonValue {
    let resource_attrs: Vec<JsonValue> = resource
        .iter()
        .map(|(k, v)| json!({ "key": k.to_string(), "value": encode_value(v) }))
        .collect();

    let spans: Vec<JsonValue> = batch.iter().map(encode_span).collect();

    json!({
        "resourceSpans": [{
            "resource": { "attributes": resource_attrs },
            "scopeSpans": [{
                "scope": { "name": "ztube" },
                "spans": spans
            }]
        }]
    })
}

/// Encodes a single span: hex-formatted IDs, nanosecond timestamps, and the
/// attribute, event, link, and status sub-objects.
fn encode_span(span: &SpanData) -> JsonValue {
    let parent = if span.parent_span_id == SpanId::INVALID {
        String::new()
    } else {
        format!("{:016x}", span.parent_span_id)
    };

    let events: Vec<JsonValue> = span
        .events
        .iter()
        .map(|event| {
            json!({
                "timeUnixNano": unix_nanos(event.timestamp),
                "name": event.name,
                "attributes": encode_attributes(&event.attributes),
            })
        })
        .collect();

    let links: Vec<JsonValue> = span
        .links
        .iter()
        .map(|link| {
            json!({
                "traceId": format!("{:032x}", link.span_context.trace_id()),
                "spanId": format!("{:016x}", link.span_context.span_id()),
                "attributes": encode_attributes(&link.attributes),
            })
        })
        .collect();

    let (status_code, status_message) = encode_status(&span.status);

    json!({
        "traceId": format!("{:032x}", span.span_context.trace_id()),
        "spanId": format!("{:016x}", span.span_context.span_id()),
        "parentSpanId": parent,
        "name": span.name,
        "kind": kind_code(&span.span_kind),
        "startTimeUnixNano": unix_nanos(span.start_time),
        "endTimeUnixNano": unix_nanos(span.end_time),
        "attributes": encode_attributes(&span.attributes),
        "events": events,
        "links": links,
        "status": { "code": status_code, "message": status_message },
    })
}

fn encode_attributes(attributes: &[KeyValue]) -> Vec<JsonValue> {
    attributes
        .iter()
        .map(|kv| json!({ "key": kv.key.to_string(), "value": encode_value(&kv.value) }))
        .collect()
}

/// Encodes an attribute value into its OTLP typed-value wrapper. Integers
/// are strings per the OTLP JSON mapping; arrays fall back to their debug
/// rendering.
fn encode_value(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => json!({ "boolValue": b }),
        Value::I64(i) => json!({ "intValue": i.to_string() }),
        Value::F64(f) => json!({ "doubleValue": f }),
        Value::String(s) => json!({ "stringValue": s.to_string() }),
        Value::Array(_) => json!({ "stringValue": format!("{value:?}") }),
    }
}

const fn kind_code(kind: &SpanKind) -> u8 {
    match kind {
        SpanKind::Internal => 1,
        SpanKind::Server => 2,
        SpanKind::Client => 3,
        SpanKind::Producer => 4,
        SpanKind::Consumer => 5,
    }
}

fn encode_status(status: &Status) -> (u8, String) {
    match status {
        Status::Unset => (0, String::new()),
        Status::Ok => (1, String::new()),
        Status::Error { description } => (2, description.to_string()),
    }
}

fn unix_nanos(time: SystemTime) -> String {
    time.duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::ZERO)
        .as_nanos()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_use_otlp_typed_wrappers() {
        assert_eq!(
            encode_value(&Value::Bool(true)),
            json!({ "boolValue": true })
        );
        assert_eq!(
            encode_value(&Value::I64(42)),
            json!({ "intValue": "42" })
        );
        assert_eq!(
            encode_value(&Value::String("hi".into())),
            json!({ "stringValue": "hi" })
        );
    }

    #[test]
    fn status_maps_to_otlp_codes() {
        assert_eq!(encode_status(&Status::Unset), (0, String::new()));
        assert_eq!(encode_status(&Status::Ok), (1, String::new()));
        assert_eq!(
            encode_status(&Status::error("boom")),
            (2, "boom".to_string())
        );
    }

    #[test]
    fn empty_batch_still_produces_a_document() {
        let resource = Resource::new(vec![KeyValue::new("service.name", "ztube")]);
        let doc = encode_batch(&resource, &[]);

        let scope = &doc["resourceSpans"][0]["scopeSpans"][0];
        assert_eq!(scope["scope"]["name"], "ztube");
        assert_eq!(scope["spans"].as_array().map(Vec::len), Some(0));
    }
}
