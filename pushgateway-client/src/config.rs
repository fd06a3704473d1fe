//! Configuration for a push gateway client.
//!
//! The client itself never reads files or the environment. Jobs that want to
//! configure the gateway outside their code can load a [`PushGatewayConfig`]
//! and turn it into a builder.

use std::path::Path;
use std::sync::Arc;

use config::builder::DefaultState;
use config::{Config as ConfigLoader, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

use crate::client::GatewayClientBuilder;
use crate::http::HttpClient;
use crate::GatewayClient;

/// Where and how to reach the push gateway.
#[derive(Debug, Clone, Deserialize)]
pub struct PushGatewayConfig {
    /// `host:port` of the gateway.
    pub address: String,
    /// `http` or `https`. Validated when the client is built.
    #[serde(default = "default_transport")]
    pub transport: String,
    /// Send deletes as HTTP DELETE rather than POST.
    #[serde(default)]
    pub use_http_delete: bool,
}

fn default_transport() -> String {
    "http".to_string()
}

impl PushGatewayConfig {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            transport: default_transport(),
            use_http_delete: false,
        }
    }

    /// Load from `pushgateway.toml` (if present) and `PUSHGATEWAY__*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(ConfigLoader::builder().add_source(File::with_name("pushgateway").required(false)))
    }

    /// Load from a specific file, still allowing environment overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::load_with(ConfigLoader::builder().add_source(File::from(path.as_ref())))
    }

    fn load_with(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let config = builder
            .set_default("transport", default_transport())?
            .set_default("use_http_delete", false)?
            // Override with environment variables (PUSHGATEWAY__KEY format)
            .add_source(
                Environment::with_prefix("PUSHGATEWAY")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Builder for a client using the default HTTP client.
    pub fn builder(&self) -> GatewayClientBuilder {
        GatewayClient::builder(self.address.clone())
            .transport(self.transport.clone())
            .use_http_delete(self.use_http_delete)
    }

    /// Builder for a client sharing `http_client`.
    pub fn builder_with_client(&self, http_client: Arc<dyn HttpClient>) -> GatewayClientBuilder {
        self.builder().http_client(http_client)
    }
}
