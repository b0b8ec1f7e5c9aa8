//! Index provisioner implementation.
//!
//! This module provides the main entry point for provisioning the compliance
//! indices. It owns a boxed `IndexAdminProvider` and the schema directory, and
//! exposes setup, list, and delete operations over the fixed managed set.

use std::path::PathBuf;

use serde_json::Value;
use tracing::{error, info, warn};

use crate::errors::SetupError;
use crate::interfaces::IndexAdminProvider;
use crate::types::{
    ClusterInfo, DeleteSummary, IndexDeleteResult, IndexOutcome, IndexSetupResult, SetupSummary,
};

/// The managed compliance indices, in provisioning order, paired with their
/// schema file names.
pub const MANAGED_INDICES: [(&str, &str); 4] = [
    ("regulations", "regulations.json"),
    ("permits", "permits.json"),
    ("inspections", "inspections.json"),
    ("compliance_events", "compliance_events.json"),
];

/// Provisions the compliance indices against a search cluster.
///
/// All operations are sequential and carry no state between calls beyond the
/// underlying connection. Creation is idempotent: indices that already exist
/// are never overwritten or diffed against the schema on disk.
pub struct IndexProvisioner {
    provider: Box<dyn IndexAdminProvider>,
    schema_dir: PathBuf,
}

impl IndexProvisioner {
    /// Create a new provisioner.
    ///
    /// # Arguments
    ///
    /// * `provider` - A boxed backend implementation (e.g. `ElasticsearchProvider`)
    /// * `schema_dir` - Directory containing the index schema JSON files
    pub fn new(provider: Box<dyn IndexAdminProvider>, schema_dir: impl Into<PathBuf>) -> Self {
        Self {
            provider,
            schema_dir: schema_dir.into(),
        }
    }

    /// Check connectivity and authentication against the cluster.
    ///
    /// Non-fatal diagnostic: the caller decides what a failure means.
    pub async fn test_connection(&self) -> Result<ClusterInfo, SetupError> {
        let cluster = self.provider.cluster_info().await?;
        info!(
            cluster = %cluster.cluster_name,
            version = %cluster.version,
            "✓ Connected to Elasticsearch"
        );
        Ok(cluster)
    }

    /// Load and parse a schema file from the schema directory.
    async fn load_schema(&self, schema_file: &str) -> Result<Value, SetupError> {
        let path = self.schema_dir.join(schema_file);
        if !path.exists() {
            return Err(SetupError::schema_load(format!(
                "Schema file not found: {}",
                path.display()
            )));
        }

        let raw = tokio::fs::read_to_string(&path).await.map_err(|e| {
            SetupError::schema_load(format!("Failed to read {}: {}", path.display(), e))
        })?;

        serde_json::from_str(&raw).map_err(|e| {
            SetupError::schema_load(format!("Invalid JSON in {}: {}", path.display(), e))
        })
    }

    /// Create a single index from its schema file, if it does not exist.
    ///
    /// The schema is resolved and parsed first, so a broken file never results
    /// in a call to the cluster. An existing index is an idempotent no-op.
    ///
    /// # Returns
    ///
    /// * `Ok(IndexOutcome::Created)` - The index was created
    /// * `Ok(IndexOutcome::AlreadyExists)` - The index was already present
    /// * `Err(SetupError)` - Schema loading or the creation call failed
    pub async fn create_index(
        &self,
        name: &str,
        schema_file: &str,
    ) -> Result<IndexOutcome, SetupError> {
        let schema = self.load_schema(schema_file).await?;

        if self.provider.index_exists(name).await? {
            warn!(index = %name, "Index already exists, skipping");
            return Ok(IndexOutcome::AlreadyExists);
        }

        self.provider.create_index(name, &schema).await?;
        info!(index = %name, "✓ Created index");
        Ok(IndexOutcome::Created)
    }

    /// Provision every managed index, in the fixed order.
    ///
    /// Runs the connectivity check first; if it fails, no creation call is
    /// attempted and the error is returned. Otherwise every entry is
    /// attempted; a per-index failure is recorded in the summary and the
    /// run continues.
    pub async fn setup_all_indices(&self) -> Result<SetupSummary, SetupError> {
        info!("Starting Elasticsearch setup");

        self.test_connection().await?;

        let mut results = Vec::with_capacity(MANAGED_INDICES.len());
        let mut succeeded = 0;
        let mut failed = 0;

        for (name, schema_file) in MANAGED_INDICES {
            match self.create_index(name, schema_file).await {
                Ok(outcome) => {
                    succeeded += 1;
                    results.push(IndexSetupResult {
                        name: name.to_string(),
                        success: true,
                        already_existed: outcome == IndexOutcome::AlreadyExists,
                        error: None,
                    });
                }
                Err(e) => {
                    failed += 1;
                    error!(index = %name, error = %e, "Failed to create index");
                    results.push(IndexSetupResult {
                        name: name.to_string(),
                        success: false,
                        already_existed: false,
                        error: Some(e),
                    });
                }
            }
        }

        let summary = SetupSummary {
            total: results.len(),
            succeeded,
            failed,
            results,
        };

        if summary.all_succeeded() {
            info!("✓ All indices created successfully");
        } else {
            error!(failed = summary.failed, "Some indices failed to create");
        }

        Ok(summary)
    }

    /// List all index names in the cluster. Pure read, no side effects.
    pub async fn list_indices(&self) -> Result<Vec<String>, SetupError> {
        self.provider.list_indices().await
    }

    /// Delete every managed index that currently exists. Irreversible.
    ///
    /// Names that are absent are silently skipped. Each name is handled
    /// independently: a failure on one never stops the remaining deletions.
    /// Indices outside the managed set are never touched.
    pub async fn delete_all_indices(&self) -> Result<DeleteSummary, SetupError> {
        let mut results = Vec::with_capacity(MANAGED_INDICES.len());
        let mut deleted = 0;
        let mut skipped = 0;
        let mut failed = 0;

        for (name, _) in MANAGED_INDICES {
            match self.provider.index_exists(name).await {
                Ok(false) => {
                    skipped += 1;
                    results.push(IndexDeleteResult {
                        name: name.to_string(),
                        deleted: false,
                        error: None,
                    });
                }
                Ok(true) => match self.provider.delete_index(name).await {
                    Ok(()) => {
                        deleted += 1;
                        info!(index = %name, "✓ Deleted index");
                        results.push(IndexDeleteResult {
                            name: name.to_string(),
                            deleted: true,
                            error: None,
                        });
                    }
                    Err(e) => {
                        failed += 1;
                        error!(index = %name, error = %e, "Failed to delete index");
                        results.push(IndexDeleteResult {
                            name: name.to_string(),
                            deleted: false,
                            error: Some(e),
                        });
                    }
                },
                Err(e) => {
                    failed += 1;
                    error!(index = %name, error = %e, "Failed to check index before delete");
                    results.push(IndexDeleteResult {
                        name: name.to_string(),
                        deleted: false,
                        error: Some(e),
                    });
                }
            }
        }

        Ok(DeleteSummary {
            total: results.len(),
            deleted,
            skipped,
            failed,
            results,
        })
    }
}
