//! Result and summary types for provisioning operations.

use crate::errors::SetupError;

/// Identity reported by the cluster info endpoint.
#[derive(Debug, Clone)]
pub struct ClusterInfo {
    /// The cluster's configured name.
    pub cluster_name: String,
    /// The server version string.
    pub version: String,
}

/// Outcome of a single idempotent index creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexOutcome {
    /// The index was created by this call.
    Created,
    /// The index was already present; nothing was sent to the cluster.
    AlreadyExists,
}

/// Result of provisioning a single index.
#[derive(Debug, Clone)]
pub struct IndexSetupResult {
    /// The logical index name.
    pub name: String,
    /// Whether the index is now present (created or pre-existing).
    pub success: bool,
    /// Whether the index already existed and creation was skipped.
    pub already_existed: bool,
    /// Error if the operation failed.
    pub error: Option<SetupError>,
}

/// Summary of a full setup run containing aggregate statistics and
/// individual results.
///
/// Every managed index is attempted even when an earlier one fails, so the
/// summary always covers the complete set.
#[derive(Debug, Clone)]
pub struct SetupSummary {
    /// Total number of indices attempted.
    pub total: usize,
    /// Number of indices present after the run.
    pub succeeded: usize,
    /// Number of indices that failed to provision.
    pub failed: usize,
    /// Individual results, in the fixed provisioning order.
    pub results: Vec<IndexSetupResult>,
}

impl SetupSummary {
    /// True only if every individual index succeeded.
    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }
}

/// Result of deleting a single managed index.
#[derive(Debug, Clone)]
pub struct IndexDeleteResult {
    /// The logical index name.
    pub name: String,
    /// Whether a delete call was issued and succeeded.
    pub deleted: bool,
    /// Error if the existence check or deletion failed.
    pub error: Option<SetupError>,
}

/// Summary of a delete run over the managed index set.
#[derive(Debug, Clone)]
pub struct DeleteSummary {
    /// Total number of managed names considered.
    pub total: usize,
    /// Number of indices deleted.
    pub deleted: usize,
    /// Number of names silently skipped because they did not exist.
    pub skipped: usize,
    /// Number of names where the check or deletion failed.
    pub failed: usize,
    /// Individual results, in the fixed order.
    pub results: Vec<IndexDeleteResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_succeeded() {
        let summary = SetupSummary {
            total: 4,
            succeeded: 4,
            failed: 0,
            results: vec![],
        };
        assert!(summary.all_succeeded());

        let summary = SetupSummary {
            total: 4,
            succeeded: 3,
            failed: 1,
            results: vec![],
        };
        assert!(!summary.all_succeeded());
    }
}
