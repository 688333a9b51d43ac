use thiserror::Error;

/// Errors surfaced while constructing a telemetry provider.
///
/// Construction is the only fallible surface of this crate; once built, all
/// delivery failures stay inside the export pipeline.
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("failed to build the OTLP span exporter: {0}")]
    Exporter(#[from] opentelemetry_otlp::ExporterBuildError),

    #[error("invalid proxy configuration: {0}")]
    Proxy(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proxy_error_display_includes_source() {
        let err = reqwest::Proxy::all("::not a url::").unwrap_err();

        let message = TelemetryError::from(err).to_string();

        assert!(message.starts_with("invalid proxy configuration:"));
    }
}
