//! Telemetry for the GitLens extension, built on OpenTelemetry.
//!
//! This crate wires the OpenTelemetry SDK into a small "send an event" /
//! "start a span" surface the rest of the extension codes against. It owns
//! the exporter pipeline explicitly instead of registering a process-wide
//! global provider, so multiple instances (tests, host reloads) stay
//! well-defined.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use gitlens_telemetry::{OtelProvider, ProviderOptions, TelemetryContext, TelemetryProvider};
//!
//! let context = TelemetryContext::new("eamodio.gitlens", "17.0.0")
//!     .with_env("production")
//!     .with_session_id(session_id);
//!
//! let telemetry = OtelProvider::new(context, ProviderOptions::default())?;
//!
//! telemetry.send_event("command/executed", Some(data), None, None);
//! telemetry.dispose();
//! ```
//!
//! # Pipelines
//!
//! - Production: spans are buffered by a batching processor and exported
//!   over OTLP/HTTP with gzip-compressed bodies. Callers never block on
//!   network I/O.
//! - Debugging ([`ProviderOptions::with_debugging`]): every finished span is
//!   written synchronously to the console and exported one-by-one to the dev
//!   collector, and verbose diagnostic logging is enabled.
//!
//! # Module Structure
//!
//! - [`api`]: the [`TelemetryProvider`] trait
//! - [`attributes`]: scalar attribute values and maps
//! - [`config`]: construction-time context and options
//! - [`error`]: error types
//! - [`otel`]: the OpenTelemetry-backed provider
//! - [`resource`]: resource attribute mapping
//! - [`span`]: the open-span handle returned by `start_event`

pub mod api;
pub mod attributes;
pub mod config;
pub mod error;
pub mod otel;
pub mod resource;
pub mod span;

// Re-exports
pub use api::TelemetryProvider;
pub use attributes::{AttributeMap, AttributeValue};
pub use config::{ProviderOptions, ProxyOptions, TelemetryContext};
pub use error::TelemetryError;
pub use otel::OtelProvider;
pub use span::EventSpan;
