//! OpenTelemetry-backed telemetry provider.
//!
//! Owns the tracer provider and its span pipelines outright; nothing is
//! registered with `opentelemetry::global`, so constructing a second
//! instance (host reload, tests) cannot disable the first.
//!
//! # Pipelines
//!
//! - Production: one batching processor in front of the OTLP/HTTP exporter.
//! - Debugging: two synchronous processors, console export for local
//!   inspection plus immediate one-by-one export to the dev collector.
//!
//! # Example
//!
//! ```rust,ignore
//! use gitlens_telemetry::{OtelProvider, ProviderOptions, TelemetryContext, TelemetryProvider};
//!
//! let telemetry = OtelProvider::new(
//!     TelemetryContext::new("eamodio.gitlens", "17.0.0"),
//!     ProviderOptions::default().with_debugging(true),
//! )?;
//!
//! let mut span = telemetry.start_event("repository/open", None, None);
//! span.set_attribute("repository.count", 3);
//! span.end();
//! ```

mod diagnostics;
pub mod exporter;

use std::time::SystemTime;

use opentelemetry::trace::{Span as _, Tracer as _, TracerProvider as _};
use opentelemetry::KeyValue;
use opentelemetry_sdk::trace::{SdkTracer, SdkTracerProvider};
use parking_lot::RwLock;
use tracing::{debug, Subscriber};
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::registry::LookupSpan;

use crate::api::TelemetryProvider;
use crate::attributes::{to_key_values, AttributeMap};
use crate::config::{ProviderOptions, TelemetryContext};
use crate::error::TelemetryError;
use crate::resource::build_resource;
use crate::span::EventSpan;

pub use exporter::{DEBUG_ENDPOINT, PRODUCTION_ENDPOINT};

/// Telemetry provider backed by the OpenTelemetry SDK.
pub struct OtelProvider {
    provider: SdkTracerProvider,
    tracer: SdkTracer,
    global_attributes: RwLock<AttributeMap>,
}

impl OtelProvider {
    /// Build the provider: resource from `context`, pipelines per `options`.
    ///
    /// Fails only if the exporter or its HTTP client cannot be constructed;
    /// nothing is retried or recovered here.
    pub fn new(
        context: TelemetryContext,
        options: ProviderOptions,
    ) -> Result<Self, TelemetryError> {
        if options.debugging {
            diagnostics::enable_verbose_logging();
        }

        let exporter = exporter::build_span_exporter(options.proxy.as_ref(), options.debugging)?;

        let mut builder = SdkTracerProvider::builder().with_resource(build_resource(&context));
        if options.debugging {
            builder = builder
                .with_simple_exporter(opentelemetry_stdout::SpanExporter::default())
                .with_simple_exporter(exporter);
        } else {
            builder = builder.with_batch_exporter(exporter);
        }

        Ok(Self::from_parts(builder.build(), &context.extension_id))
    }

    fn from_parts(provider: SdkTracerProvider, scope: &str) -> Self {
        let tracer = provider.tracer(scope.to_owned());
        Self {
            provider,
            tracer,
            global_attributes: RwLock::new(AttributeMap::new()),
        }
    }

    /// Best-effort flush of pending batched spans. Errors are swallowed.
    pub fn flush(&self) {
        if let Err(err) = self.provider.force_flush() {
            debug!(error = %err, "telemetry flush reported an error");
        }
    }

    /// A `tracing` layer feeding the host's existing instrumentation into
    /// this provider's pipeline.
    pub fn tracing_layer<S>(&self) -> OpenTelemetryLayer<S, SdkTracer>
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        tracing_opentelemetry::layer().with_tracer(self.tracer.clone())
    }

    /// Global attributes overlaid with per-call data; data wins per key.
    /// Deduplicated here because SDK span attributes are append-only.
    fn merged_attributes(&self, data: Option<AttributeMap>) -> Vec<KeyValue> {
        let mut merged = self.global_attributes.read().clone();
        if let Some(data) = data {
            merged.extend(data);
        }
        to_key_values(merged)
    }
}

impl TelemetryProvider for OtelProvider {
    fn send_event(
        &self,
        name: &str,
        data: Option<AttributeMap>,
        start_time: Option<SystemTime>,
        end_time: Option<SystemTime>,
    ) {
        let mut span = self
            .tracer
            .span_builder(name.to_owned())
            .with_start_time(start_time.unwrap_or_else(SystemTime::now))
            .with_attributes(self.merged_attributes(data))
            .start(&self.tracer);

        match end_time {
            Some(at) => span.end_with_timestamp(at),
            None => span.end(),
        }
    }

    fn start_event(
        &self,
        name: &str,
        data: Option<AttributeMap>,
        start_time: Option<SystemTime>,
    ) -> EventSpan {
        let span = self
            .tracer
            .span_builder(name.to_owned())
            .with_start_time(start_time.unwrap_or_else(SystemTime::now))
            .with_attributes(self.merged_attributes(data))
            .start(&self.tracer);

        EventSpan::new(span)
    }

    fn set_global_attributes(&self, attributes: AttributeMap) {
        *self.global_attributes.write() = attributes;
    }

    fn dispose(&self) {
        self.flush();
        if let Err(err) = self.provider.shutdown() {
            debug!(error = %err, "telemetry provider shutdown reported an error");
        }
    }
}
