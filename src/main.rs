//! Compliance Search Setup entry point.
//!
//! One-shot administrative tool: connects to the Elasticsearch cluster
//! configured in the environment, provisions the managed compliance indices
//! from the local schema files, then lists the indices in the cluster.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use compliance_search_setup::{ClusterConfig, ElasticsearchProvider, IndexProvisioner};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Default directory holding the index schema files.
const DEFAULT_SCHEMA_DIR: &str = "indices";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    // Load environment variables
    dotenv::dotenv().ok();

    // A configuration error is the only condition that exits non-zero;
    // nothing below touches the network before this succeeds.
    let config = ClusterConfig::from_env().context("Setup failed")?;
    let provider = ElasticsearchProvider::new(&config).context("Setup failed")?;

    let schema_dir = env::var("SCHEMA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_SCHEMA_DIR));

    let provisioner = IndexProvisioner::new(Box::new(provider), schema_dir);

    match provisioner.setup_all_indices().await {
        Ok(summary) => {
            for result in &summary.results {
                if let Some(error) = &result.error {
                    error!(index = %result.name, error = %error, "Index not provisioned");
                }
            }
        }
        Err(e) => {
            error!(error = %e, "Elasticsearch setup aborted");
        }
    }

    match provisioner.list_indices().await {
        Ok(indices) => {
            info!("Current indices:");
            for name in indices {
                info!("  - {}", name);
            }
        }
        Err(e) => {
            error!(error = %e, "Failed to list indices");
        }
    }

    Ok(())
}
