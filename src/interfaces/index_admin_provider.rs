//! Index administration provider trait definition.
//!
//! This module defines the abstract interface for index management
//! operations, allowing for different backend implementations and for mock
//! providers in tests.

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::SetupError;
use crate::types::ClusterInfo;

/// Abstracts the index-management surface of the search cluster.
///
/// Implementations are injected into `IndexProvisioner` as a boxed trait
/// object. All methods return `Result<T, SetupError>` for consistent error
/// handling; none of them print, presentation belongs to the caller.
#[async_trait]
pub trait IndexAdminProvider: Send + Sync {
    /// Fetch cluster identity and version via the lightweight info endpoint.
    ///
    /// Used as the connectivity and authentication check before any index
    /// creation is attempted.
    async fn cluster_info(&self) -> Result<ClusterInfo, SetupError>;

    /// Check whether an index with the given name exists.
    async fn index_exists(&self, name: &str) -> Result<bool, SetupError>;

    /// Create an index, passing the schema document through verbatim as the
    /// creation body (settings and mappings).
    ///
    /// Callers are expected to check existence first; this call fails if the
    /// index is already present.
    async fn create_index(&self, name: &str, schema: &Value) -> Result<(), SetupError>;

    /// List all index names in the cluster (wildcard match). Pure read.
    async fn list_indices(&self) -> Result<Vec<String>, SetupError>;

    /// Delete an index by name.
    ///
    /// Deleting a name that does not exist is not an error.
    async fn delete_index(&self, name: &str) -> Result<(), SetupError>;
}
