//! Push gateway client.
//!
//! Every operation is a single request: build the job URL, optionally render
//! the registry, send, and check the status. There are no retries and no
//! background work; callers own any retry policy.

use std::sync::Arc;

use pushgateway_common::{job_path, GroupingKey, PushMethod, TransportScheme};

use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestOptions, ReqwestHttpClient};
use crate::registry::{render_text, MetricRegistry, TEXT_CONTENT_TYPE};

/// Status codes the gateway answers with when it accepts a request.
///
/// Only these count as success. Any other code, including `204 No Content`,
/// is reported as [`Error::UnexpectedResponse`].
pub const ACCEPTED_STATUS_CODES: [u16; 2] = [200, 202];

/// Client for a single push gateway.
///
/// Job names, label names and label values are put into the URL path
/// verbatim. They must already be path-safe; see
/// [`pushgateway_common::grouping`].
#[derive(Clone)]
pub struct GatewayClient {
    address: String,
    scheme: TransportScheme,
    http_client: Arc<dyn HttpClient>,
    delete_method: PushMethod,
}

impl std::fmt::Debug for GatewayClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayClient")
            .field("address", &self.address)
            .field("scheme", &self.scheme)
            .field("delete_method", &self.delete_method)
            .finish_non_exhaustive()
    }
}

impl GatewayClient {
    /// Plain `http` client for `address` (`host:port`) with a default HTTP client.
    pub fn new(address: impl Into<String>) -> Result<Self> {
        Self::builder(address).build()
    }

    pub fn builder(address: impl Into<String>) -> GatewayClientBuilder {
        GatewayClientBuilder::new(address)
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn scheme(&self) -> TransportScheme {
        self.scheme
    }

    /// Push all metrics of `registry`, replacing the whole group identified
    /// by `job` and `grouping_key`. Uses HTTP PUT.
    pub async fn push<R>(&self, registry: &R, job: &str, grouping_key: &GroupingKey) -> Result<()>
    where
        R: MetricRegistry + ?Sized,
    {
        let body = render_text(&registry.metric_families())?;
        self.do_request(PushMethod::Put, job, grouping_key, Some(body))
            .await
    }

    /// Push all metrics of `registry`, replacing only previously pushed
    /// metrics with the same name in the same group. Uses HTTP POST.
    pub async fn push_add<R>(
        &self,
        registry: &R,
        job: &str,
        grouping_key: &GroupingKey,
    ) -> Result<()>
    where
        R: MetricRegistry + ?Sized,
    {
        let body = render_text(&registry.metric_families())?;
        self.do_request(PushMethod::Post, job, grouping_key, Some(body))
            .await
    }

    /// Delete the group identified by `job` and `grouping_key`.
    ///
    /// Sent as a bodiless HTTP POST unless the client was built with
    /// [`GatewayClientBuilder::use_http_delete`], in which case HTTP DELETE is used.
    pub async fn delete(&self, job: &str, grouping_key: &GroupingKey) -> Result<()> {
        self.do_request(self.delete_method, job, grouping_key, None)
            .await
    }

    /// `{scheme}://{address}/metrics/job/{job}[/{label}/{value}]*`
    pub fn job_url(&self, job: &str, grouping_key: &GroupingKey) -> String {
        format!(
            "{}://{}{}",
            self.scheme,
            self.address,
            job_path(job, grouping_key)
        )
    }

    async fn do_request(
        &self,
        method: PushMethod,
        job: &str,
        grouping_key: &GroupingKey,
        body: Option<String>,
    ) -> Result<()> {
        let url = self.job_url(job, grouping_key);

        tracing::debug!(
            method = %method,
            url = %url,
            has_body = body.is_some(),
            "Sending request to push gateway"
        );

        let options = RequestOptions {
            headers: vec![("Content-Type".to_string(), TEXT_CONTENT_TYPE.to_string())],
            body,
            ..RequestOptions::default()
        };

        let response = self.http_client.request(method, &url, options).await?;

        if !ACCEPTED_STATUS_CODES.contains(&response.status) {
            return Err(Error::UnexpectedResponse {
                status: response.status,
                body: response.body,
                address: self.address.clone(),
            });
        }

        tracing::debug!(status = response.status, url = %url, "Push gateway accepted request");
        Ok(())
    }
}

/// Builder for [`GatewayClient`].
pub struct GatewayClientBuilder {
    address: String,
    http_client: Option<Arc<dyn HttpClient>>,
    transport: Option<String>,
    scheme: TransportScheme,
    use_http_delete: bool,
}

impl GatewayClientBuilder {
    fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            http_client: None,
            transport: None,
            scheme: TransportScheme::default(),
            use_http_delete: false,
        }
    }

    /// Share an existing HTTP client instead of building a default one.
    pub fn http_client(mut self, http_client: Arc<dyn HttpClient>) -> Self {
        self.http_client = Some(http_client);
        self
    }

    /// Transport scheme by name. Validated in [`build`](Self::build); only
    /// `http` and `https` are accepted.
    pub fn transport(mut self, transport: impl Into<String>) -> Self {
        self.transport = Some(transport.into());
        self
    }

    pub fn scheme(mut self, scheme: TransportScheme) -> Self {
        self.scheme = scheme;
        self.transport = None;
        self
    }

    /// Send [`GatewayClient::delete`] as HTTP DELETE instead of POST.
    pub fn use_http_delete(mut self, enabled: bool) -> Self {
        self.use_http_delete = enabled;
        self
    }

    pub fn build(self) -> Result<GatewayClient> {
        let scheme = match self.transport {
            Some(transport) => transport.parse::<TransportScheme>()?,
            None => self.scheme,
        };

        let http_client: Arc<dyn HttpClient> = match self.http_client {
            Some(http_client) => http_client,
            None => Arc::new(ReqwestHttpClient::new()?),
        };

        let delete_method = if self.use_http_delete {
            PushMethod::Delete
        } else {
            PushMethod::Post
        };

        Ok(GatewayClient {
            address: self.address,
            scheme,
            http_client,
            delete_method,
        })
    }
}
