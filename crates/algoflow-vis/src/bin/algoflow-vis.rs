//! AlgoFlow visualizer server.

use std::sync::Arc;

use algoflow_vis::{VisConfig, VisServer};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "algoflow_core=info,algoflow_vis=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = VisConfig::parse();
    let registry = Arc::new(algoflow_topics::registry()?);

    VisServer::new(registry, config).serve().await?;
    Ok(())
}
