//! HTTP client abstraction.
//!
//! `GatewayClient` only depends on the [`HttpClient`] trait, so a
//! pre-configured client (custom TLS, proxies, a test fake) can be shared
//! across many gateway clients. [`ReqwestHttpClient`] is the default
//! implementation.

use std::time::Duration;

use async_trait::async_trait;
use pushgateway_common::PushMethod;
use reqwest::{Client, Method};

use crate::error::TransportError;

/// Connection-establishment timeout applied to every gateway request.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Total request timeout applied to every gateway request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Per-request options handed to an [`HttpClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOptions {
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    /// Advisory for clients that only take a connect timeout at build time.
    /// [`ReqwestHttpClient`] ignores it and relies on the timeout its
    /// `reqwest::Client` was built with.
    pub connect_timeout: Duration,
    /// Total time allowed for the exchange. Applied to every request.
    pub timeout: Duration,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            headers: Vec::new(),
            body: None,
            connect_timeout: CONNECT_TIMEOUT,
            timeout: REQUEST_TIMEOUT,
        }
    }
}

/// Status and body of a completed exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Anything that can issue a single HTTP request.
///
/// Implementations must be safe to call concurrently; the gateway client adds
/// no locking of its own.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn request(
        &self,
        method: PushMethod,
        url: &str,
        options: RequestOptions,
    ) -> Result<HttpResponse, TransportError>;
}

/// [`HttpClient`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    http_client: Client,
}

impl ReqwestHttpClient {
    /// Build a client with the gateway connect and request timeouts and no
    /// other configuration.
    pub fn new() -> Result<Self, TransportError> {
        let http_client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { http_client })
    }

    /// Wrap a pre-built client.
    ///
    /// reqwest only accepts a connect timeout at build time, so the
    /// caller's own connect timeout is kept. The total timeout from
    /// [`RequestOptions`] is still applied per request.
    pub fn from_client(http_client: Client) -> Self {
        Self { http_client }
    }
}

fn reqwest_method(method: PushMethod) -> Method {
    match method {
        PushMethod::Put => Method::PUT,
        PushMethod::Post => Method::POST,
        PushMethod::Delete => Method::DELETE,
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn request(
        &self,
        method: PushMethod,
        url: &str,
        options: RequestOptions,
    ) -> Result<HttpResponse, TransportError> {
        let mut request = self
            .http_client
            .request(reqwest_method(method), url)
            .timeout(options.timeout);

        for (name, value) in &options.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        if let Some(body) = options.body {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_use_fixed_timeouts() {
        let options = RequestOptions::default();
        assert_eq!(options.connect_timeout, Duration::from_secs(10));
        assert_eq!(options.timeout, Duration::from_secs(20));
        assert!(options.headers.is_empty());
        assert!(options.body.is_none());
    }

    #[tokio::test]
    async fn test_elapsed_timeout_is_transport_error() {
        use wiremock::matchers::method;
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&server)
            .await;

        let http_client = ReqwestHttpClient::from_client(Client::new());
        let options = RequestOptions {
            timeout: Duration::from_millis(100),
            ..RequestOptions::default()
        };

        let err = http_client
            .request(PushMethod::Put, &format!("{}/metrics/job/slow", server.uri()), options)
            .await
            .unwrap_err();

        assert!(err.is_timeout(), "got {err:?}");
        let err: crate::Error = err.into();
        assert!(matches!(err, crate::Error::Transport(TransportError::Http(_))));
    }

    #[test]
    fn test_reqwest_method_mapping() {
        assert_eq!(reqwest_method(PushMethod::Put), Method::PUT);
        assert_eq!(reqwest_method(PushMethod::Post), Method::POST);
        assert_eq!(reqwest_method(PushMethod::Delete), Method::DELETE);
    }
}
