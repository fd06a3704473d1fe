//! Batch job that reports its metrics to a push gateway before exiting.
//!
//! Run with a gateway listening on `localhost:9091`, or point it elsewhere:
//!
//! ```text
//! PUSHGATEWAY__ADDRESS=gateway:9091 cargo run --example batch_job
//! ```

use std::time::{SystemTime, UNIX_EPOCH};

use prometheus::{Counter, Gauge, Opts, Registry};
use pushgateway_client::{GroupingKey, PushGatewayConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration, falling back to a local gateway
    let config = match PushGatewayConfig::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::info!("No gateway configuration found ({}), using localhost:9091", e);
            PushGatewayConfig::new("localhost:9091")
        }
    };
    let client = config.builder().build()?;

    let registry = Registry::new();
    let rows = Counter::with_opts(Opts::new("batch_rows_processed", "Rows processed by this run"))?;
    let last_success = Gauge::new(
        "batch_last_success_seconds",
        "Unix time this job last completed successfully",
    )?;
    registry.register(Box::new(rows.clone()))?;
    registry.register(Box::new(last_success.clone()))?;

    // The actual work.
    for _ in 0..1000 {
        rows.inc();
    }
    last_success.set(SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs_f64());

    let grouping_key = GroupingKey::from([("instance", "demo")]);
    client.push(&registry, "batch_job", &grouping_key).await?;
    tracing::info!("Pushed metrics to {}", client.address());

    Ok(())
}
