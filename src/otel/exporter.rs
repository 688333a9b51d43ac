use std::io::Write;

use async_trait::async_trait;
use bytes::Bytes;
use flate2::write::GzEncoder;
use flate2::Compression;
use http::header::{HeaderValue, CONTENT_ENCODING, CONTENT_LENGTH};
use http::{Request, Response};
use opentelemetry_http::{HttpClient, HttpError};
use opentelemetry_otlp::{SpanExporter, WithExportConfig, WithHttpConfig};
use tracing::debug;

use crate::config::ProxyOptions;
use crate::error::TelemetryError;

/// Collector endpoint for production builds.
pub const PRODUCTION_ENDPOINT: &str = "https://otel.gitkraken.com:4318/v1/traces";

/// Collector endpoint used while debugging.
pub const DEBUG_ENDPOINT: &str = "https://otel-dev.gitkraken.com:4318/v1/traces";

/// Select the collector endpoint for the given mode.
pub(crate) fn endpoint(debugging: bool) -> &'static str {
    if debugging {
        DEBUG_ENDPOINT
    } else {
        PRODUCTION_ENDPOINT
    }
}

/// Build the OTLP/HTTP span exporter: gzip-compressed bodies, optional proxy.
pub(crate) fn build_span_exporter(
    proxy: Option<&ProxyOptions>,
    debugging: bool,
) -> Result<SpanExporter, TelemetryError> {
    let endpoint = endpoint(debugging);
    debug!(endpoint, "building OTLP span exporter");

    let exporter = SpanExporter::builder()
        .with_http()
        .with_endpoint(endpoint)
        .with_http_client(GzipHttpClient::new(build_http_client(proxy)?))
        .build()?;

    Ok(exporter)
}

fn build_http_client(proxy: Option<&ProxyOptions>) -> Result<reqwest::blocking::Client, TelemetryError> {
    let mut builder = reqwest::blocking::Client::builder();

    if let Some(options) = proxy {
        let mut proxy = reqwest::Proxy::all(&options.url)?;
        if let (Some(username), Some(password)) = (&options.username, &options.password) {
            proxy = proxy.basic_auth(username, password);
        }
        builder = builder.proxy(proxy);
    }

    Ok(builder.build()?)
}

/// HTTP client wrapper that gzips request bodies before delegating.
///
/// The OTLP HTTP exporter does not compress payloads itself; the collector
/// requires `Content-Encoding: gzip`.
#[derive(Debug)]
pub(crate) struct GzipHttpClient<C> {
    inner: C,
}

impl<C> GzipHttpClient<C> {
    pub(crate) fn new(inner: C) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<C: HttpClient> HttpClient for GzipHttpClient<C> {
    async fn send_bytes(&self, request: Request<Bytes>) -> Result<Response<Bytes>, HttpError> {
        let (mut parts, body) = request.into_parts();

        let mut encoder = GzEncoder::new(Vec::with_capacity(body.len() / 2), Compression::default());
        encoder.write_all(&body)?;
        let compressed = encoder.finish()?;

        parts
            .headers
            .insert(CONTENT_ENCODING, HeaderValue::from_static("gzip"));
        // The transport recomputes the length for the compressed body.
        parts.headers.remove(CONTENT_LENGTH);

        self.inner
            .send_bytes(Request::from_parts(parts, Bytes::from(compressed)))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn endpoint_selection_follows_debug_flag() {
        assert_eq!(endpoint(false), PRODUCTION_ENDPOINT);
        assert_eq!(endpoint(true), DEBUG_ENDPOINT);
    }

    #[test]
    fn build_exporter_without_proxy_succeeds() {
        let result = build_span_exporter(None, false);

        assert!(result.is_ok());
    }

    #[test]
    fn build_exporter_with_proxy_succeeds() {
        let proxy = ProxyOptions::new("http://proxy.internal:3128").with_basic_auth("user", "pass");

        let result = build_span_exporter(Some(&proxy), true);

        assert!(result.is_ok());
    }

    #[test]
    fn build_exporter_with_invalid_proxy_url_fails() {
        let proxy = ProxyOptions::new("::not a url::");

        let result = build_span_exporter(Some(&proxy), false);

        assert!(matches!(result, Err(TelemetryError::Proxy(_))));
    }

    /// Stub client capturing the request the gzip wrapper produces.
    #[derive(Debug, Default, Clone)]
    struct CaptureClient {
        captured: std::sync::Arc<std::sync::Mutex<Option<Request<Bytes>>>>,
    }

    #[async_trait]
    impl HttpClient for CaptureClient {
        async fn send_bytes(&self, request: Request<Bytes>) -> Result<Response<Bytes>, HttpError> {
            *self.captured.lock().unwrap() = Some(request);
            Ok(Response::new(Bytes::new()))
        }
    }

    #[tokio::test]
    async fn gzip_client_compresses_body_and_sets_header() {
        let capture = CaptureClient::default();
        let client = GzipHttpClient::new(capture.clone());
        let request = Request::builder()
            .uri("https://otel.gitkraken.com:4318/v1/traces")
            .header(CONTENT_LENGTH, 9)
            .body(Bytes::from_static(b"span data"))
            .unwrap();

        client.send_bytes(request).await.unwrap();

        let captured = capture.captured.lock().unwrap().take().expect("request");
        assert_eq!(
            captured.headers().get(CONTENT_ENCODING),
            Some(&HeaderValue::from_static("gzip"))
        );
        assert!(captured.headers().get(CONTENT_LENGTH).is_none());

        let mut decoder = flate2::read::GzDecoder::new(&captured.body()[..]);
        let mut decoded = Vec::new();
        decoder.read_to_end(&mut decoded).unwrap();
        assert_eq!(decoded, b"span data");
    }
}
