use std::time::SystemTime;

use opentelemetry::trace::Span as _;
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::trace::Span;

use crate::attributes::AttributeValue;

/// Handle to an open event span returned by
/// [`TelemetryProvider::start_event`](crate::TelemetryProvider::start_event).
///
/// The span is submitted to the export pipeline when the handle is ended.
/// Dropping an un-ended handle ends the span at drop time; a handle that is
/// held and never ended never exports.
pub struct EventSpan {
    inner: Span,
}

impl EventSpan {
    pub(crate) fn new(inner: Span) -> Self {
        Self { inner }
    }

    /// Set or overwrite one attribute on the open span.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<AttributeValue>) {
        self.inner
            .set_attribute(KeyValue::new(key.into(), Value::from(value.into())));
    }

    /// Close the span now and submit it to the pipeline.
    pub fn end(mut self) {
        self.inner.end();
    }

    /// Close the span at `end_time` and submit it to the pipeline.
    pub fn end_at(mut self, end_time: SystemTime) {
        self.inner.end_with_timestamp(end_time);
    }
}
