//! Request execution with tracing instrumentation.
//!
//! The [`Transport`] trait is the only suspension point of the client: it
//! takes a finished [`RequestDescriptor`] and yields the decoded JSON body.
//! [`HttpTransport`] is the default, reqwest-backed implementation; tests
//! substitute in-memory transports.

use std::fmt;
use std::future::Future;
use std::time::Duration;

use payrail_define::{RequestDescriptor, RestMethod};
use serde_json::Value;
use tracing::{Span, debug, instrument};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ConfigError, TransportError};

/// Sends request descriptors and returns response bodies.
pub trait Transport: Send + Sync {
    /// Sends one request.
    ///
    /// A success response with an empty body yields `Value::Null`.
    fn send(
        &self,
        request: RequestDescriptor,
    ) -> impl Future<Output = Result<Value, TransportError>> + Send;
}

/// HTTP transport built on `reqwest`.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
    default_headers: Vec<(String, String)>,
    timeout: Duration,
}

impl HttpTransport {
    /// Creates a transport from a validated configuration.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent())
            .pool_max_idle_per_host(10)
            .build()
            .map_err(ConfigError::HttpClient)?;

        Ok(Self {
            client,
            base_url: config.base_url().clone(),
            default_headers: config.default_headers().to_vec(),
            timeout: config.timeout(),
        })
    }

    /// Returns the base URL for this transport.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn classify(&self, err: reqwest::Error) -> TransportError {
        if err.is_timeout() {
            TransportError::Timeout {
                duration_ms: u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
            }
        } else if err.is_connect() {
            TransportError::Connection(err.to_string())
        } else {
            TransportError::Request(err)
        }
    }
}

impl Transport for HttpTransport {
    #[instrument(
        name = "payrail_request",
        skip(self, request),
        fields(
            http.method = tracing::field::Empty,
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
        )
    )]
    async fn send(&self, request: RequestDescriptor) -> Result<Value, TransportError> {
        Span::current().record("http.method", request.method().as_str());
        let url = request.url(&self.base_url)?;
        Span::current().record("http.url", url.as_str());

        let mut builder = self.client.request(to_reqwest(request.method()), url);
        for (name, value) in merge_headers(&self.default_headers, request.headers()) {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body() {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| self.classify(e))?;

        let status = response.status();
        let status_code = status.as_u16();
        Span::current().record("http.status_code", status_code);

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| status.to_string());
            let otel_status = if status.is_server_error() {
                "ERROR"
            } else {
                "UNSET"
            };
            Span::current().record("otel.status_code", otel_status);
            debug!(status = status_code, "Request rejected");

            return Err(TransportError::HttpStatus {
                status: status_code,
                body,
            });
        }

        Span::current().record("otel.status_code", "OK");

        let bytes = response.bytes().await.map_err(|e| self.classify(e))?;
        debug!(bytes = bytes.len(), "Received response");
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&bytes).map_err(|e| TransportError::InvalidResponse(e.to_string()))
    }
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header_names: Vec<&str> = self
            .default_headers
            .iter()
            .map(|(name, _)| name.as_str())
            .collect();
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url.as_str())
            .field("default_headers", &header_names)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

fn to_reqwest(method: RestMethod) -> reqwest::Method {
    match method {
        RestMethod::Get => reqwest::Method::GET,
        RestMethod::Post => reqwest::Method::POST,
        RestMethod::Put => reqwest::Method::PUT,
        RestMethod::Patch => reqwest::Method::PATCH,
        RestMethod::Delete => reqwest::Method::DELETE,
        RestMethod::Head => reqwest::Method::HEAD,
        RestMethod::Options => reqwest::Method::OPTIONS,
    }
}

/// Merges default and request headers.
///
/// Request headers override defaults with the same name, ignoring case.
fn merge_headers<'a>(
    defaults: &'a [(String, String)],
    request: &'a [(String, String)],
) -> Vec<(&'a str, &'a str)> {
    let mut merged = Vec::with_capacity(defaults.len() + request.len());

    for (name, value) in defaults {
        let overridden = request.iter().any(|(k, _)| k.eq_ignore_ascii_case(name));
        if !overridden {
            merged.push((name.as_str(), value.as_str()));
        }
    }
    for (name, value) in request {
        merged.push((name.as_str(), value.as_str()));
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use payrail_define::RequestBuilder;
    use serde_json::json;
    use tracing_test::traced_test;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn transport(server: &MockServer) -> HttpTransport {
        let config = ClientConfig::builder()
            .base_url(server.uri())
            .access_key("ak_test")
            .build()
            .unwrap();
        HttpTransport::new(&config).unwrap()
    }

    #[test]
    fn test_merge_headers_overrides_case_insensitively() {
        let defaults = pairs(&[("Accept", "application/json"), ("X-Merchant", "m_1")]);
        let request = pairs(&[("x-merchant", "m_2"), ("Idempotency-Key", "k1")]);

        assert_eq!(
            merge_headers(&defaults, &request),
            vec![
                ("Accept", "application/json"),
                ("x-merchant", "m_2"),
                ("Idempotency-Key", "k1"),
            ]
        );
    }

    #[test]
    fn test_debug_hides_header_values() {
        let config = ClientConfig::builder()
            .access_key("ak_secret")
            .build()
            .unwrap();
        let transport = HttpTransport::new(&config).unwrap();

        let debug = format!("{transport:?}");
        assert!(debug.contains("access_key"));
        assert!(!debug.contains("ak_secret"));
    }

    #[test]
    fn test_method_conversion() {
        assert_eq!(to_reqwest(RestMethod::Delete), reqwest::Method::DELETE);
        assert_eq!(to_reqwest(RestMethod::Patch).as_str(), RestMethod::Patch.as_str());
    }

    #[tokio::test]
    #[traced_test]
    async fn test_send_posts_json_and_records_span() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/widgets"))
            .and(header("access_key", "ak_test"))
            .and(body_json(json!({"name": "gear"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "widget_123"})))
            .mount(&server)
            .await;

        let request = RequestBuilder::new("/v1/widgets")
            .with_body(json!({"name": "gear"}))
            .finalize(RestMethod::Post)
            .unwrap();
        let body = transport(&server).send(request).await.unwrap();

        assert_eq!(body, json!({"id": "widget_123"}));
        assert!(logs_contain("payrail_request"));
        assert!(logs_contain("http.status_code=201"));
    }

    #[tokio::test]
    async fn test_empty_success_body_is_null() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/widgets/widget_123/archive"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let request = RequestBuilder::new("/v1/widgets/{id}/archive")
            .with_path_param("id", "widget_123")
            .finalize(RestMethod::Post)
            .unwrap();
        let body = transport(&server).send(request).await.unwrap();

        assert_eq!(body, Value::Null);
    }

    #[tokio::test]
    async fn test_error_status_keeps_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/widgets/missing"))
            .respond_with(
                ResponseTemplate::new(404).set_body_string(r#"{"error":"resource_missing"}"#),
            )
            .mount(&server)
            .await;

        let request = RequestBuilder::new("/v1/widgets/{id}")
            .with_path_param("id", "missing")
            .finalize(RestMethod::Get)
            .unwrap();
        let err = transport(&server).send(request).await.unwrap_err();

        match err {
            TransportError::HttpStatus { status, body } => {
                assert_eq!(status, 404);
                assert!(body.contains("resource_missing"));
            }
            other => panic!("expected HttpStatus, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_invalid_json_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/widgets"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let request = RequestBuilder::new("/v1/widgets")
            .finalize(RestMethod::Get)
            .unwrap();
        let err = transport(&server).send(request).await.unwrap_err();

        assert!(matches!(err, TransportError::InvalidResponse(_)));
    }
}
