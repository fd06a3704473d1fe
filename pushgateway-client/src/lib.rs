//! Push Gateway Client
//!
//! Pushes Prometheus metric snapshots from short-lived processes (batch jobs,
//! cron tasks) to a push gateway.
//!
//! ```ignore
//! let registry = prometheus::Registry::new();
//! let client = GatewayClient::new("localhost:9091")?;
//! client
//!     .push(&registry, "batchjob", &GroupingKey::from([("instance", "1")]))
//!     .await?;
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod registry;

#[cfg(test)]
mod test_util;

pub use client::{GatewayClient, GatewayClientBuilder, ACCEPTED_STATUS_CODES};
pub use config::PushGatewayConfig;
pub use error::{Error, Result, TransportError};
pub use http::{HttpClient, HttpResponse, ReqwestHttpClient, RequestOptions};
pub use registry::{render_text, MetricRegistry, TEXT_CONTENT_TYPE};

pub use pushgateway_common::{GroupingKey, PushMethod, TransportScheme};
