use opentelemetry::KeyValue;
use opentelemetry_sdk::Resource;
use opentelemetry_semantic_conventions::resource::{
    DEPLOYMENT_ENVIRONMENT_NAME, DEVICE_ID, OS_TYPE, SERVICE_NAME, SERVICE_VERSION,
};

use crate::config::TelemetryContext;

/// Fixed service name reported on every span this process emits.
pub const SERVICE: &str = "gitlens";

/// Extension identifier attribute.
pub const EXTENSION_ID: &str = "extension.id";

/// Host session identifier attribute.
pub const SESSION_ID: &str = "session.id";

/// UI language attribute.
pub const LANGUAGE: &str = "language";

/// Hosting editor edition/version/application attributes.
pub const VSCODE_EDITION: &str = "vscode.edition";
pub const VSCODE_VERSION: &str = "vscode.version";
pub const VSCODE_HOST: &str = "vscode.host";

/// Map the construction context onto resource attributes.
pub fn context_attributes(context: &TelemetryContext) -> Vec<KeyValue> {
    vec![
        KeyValue::new(SERVICE_NAME, SERVICE),
        KeyValue::new(SERVICE_VERSION, context.extension_version.clone()),
        KeyValue::new(DEPLOYMENT_ENVIRONMENT_NAME, context.env.clone()),
        KeyValue::new(DEVICE_ID, context.machine_id.clone()),
        KeyValue::new(OS_TYPE, context.platform.clone()),
        KeyValue::new(EXTENSION_ID, context.extension_id.clone()),
        KeyValue::new(SESSION_ID, context.session_id.clone()),
        KeyValue::new(LANGUAGE, context.language.clone()),
        KeyValue::new(VSCODE_EDITION, context.vscode_edition.clone()),
        KeyValue::new(VSCODE_VERSION, context.vscode_version.clone()),
        KeyValue::new(VSCODE_HOST, context.vscode_host.clone()),
    ]
}

/// Build the resource all emitted spans are bound to.
pub fn build_resource(context: &TelemetryContext) -> Resource {
    Resource::builder()
        .with_attributes(context_attributes(context))
        .build()
}
