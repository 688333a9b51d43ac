use std::time::SystemTime;

use crate::attributes::AttributeMap;
use crate::span::EventSpan;

/// Trait for telemetry providers the extension host codes against.
///
/// All methods are infallible at the call site: telemetry must never crash
/// or visibly disrupt the host, so delivery failures stay inside the
/// pipeline.
pub trait TelemetryProvider: Send + Sync {
    /// Emit a complete event: a span opened at `start_time` (default: now)
    /// and closed at `end_time` (default: immediately).
    ///
    /// Attributes are the provider's global attributes overlaid with `data`;
    /// `data` wins on key conflicts.
    fn send_event(
        &self,
        name: &str,
        data: Option<AttributeMap>,
        start_time: Option<SystemTime>,
        end_time: Option<SystemTime>,
    );

    /// Open a long-lived event span and hand it to the caller.
    ///
    /// The span does not reach the export pipeline until the returned handle
    /// is ended (or dropped).
    fn start_event(
        &self,
        name: &str,
        data: Option<AttributeMap>,
        start_time: Option<SystemTime>,
    ) -> EventSpan;

    /// Replace the entire global-attribute map. Keys absent from the new map
    /// are dropped. Takes effect on the next emitted span.
    fn set_global_attributes(&self, attributes: AttributeMap);

    /// Flush pending spans and shut the pipeline down. Safe to call more
    /// than once; events sent afterwards are silently discarded.
    fn dispose(&self);
}
