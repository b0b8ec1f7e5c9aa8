//! Integration tests for the index provisioner.
//!
//! These tests use the real IndexProvisioner but a mock IndexAdminProvider
//! backed by an in-memory cluster state to ensure reliable testing.

use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use compliance_search_setup::{
    ClusterInfo, IndexAdminProvider, IndexProvisioner, SetupError, MANAGED_INDICES,
};

// Mock provider simulating a live cluster as a set of index names
struct MockCluster {
    indices: Arc<Mutex<BTreeSet<String>>>,
}

impl MockCluster {
    fn new(preexisting: &[&str]) -> Self {
        Self {
            indices: Arc::new(Mutex::new(
                preexisting.iter().map(|s| s.to_string()).collect(),
            )),
        }
    }

    fn state(&self) -> Arc<Mutex<BTreeSet<String>>> {
        self.indices.clone()
    }
}

#[async_trait]
impl IndexAdminProvider for MockCluster {
    async fn cluster_info(&self) -> Result<ClusterInfo, SetupError> {
        Ok(ClusterInfo {
            cluster_name: "test-cluster".to_string(),
            version: "8.11.0".to_string(),
        })
    }

    async fn index_exists(&self, name: &str) -> Result<bool, SetupError> {
        Ok(self.indices.lock().unwrap().contains(name))
    }

    async fn create_index(&self, name: &str, _schema: &Value) -> Result<(), SetupError> {
        self.indices.lock().unwrap().insert(name.to_string());
        Ok(())
    }

    async fn list_indices(&self) -> Result<Vec<String>, SetupError> {
        Ok(self.indices.lock().unwrap().iter().cloned().collect())
    }

    async fn delete_index(&self, name: &str) -> Result<(), SetupError> {
        self.indices.lock().unwrap().remove(name);
        Ok(())
    }
}

/// Helper to write all managed schema files into a per-test temp directory.
fn schema_dir(test_name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "compliance-setup-it-{}-{}",
        test_name,
        std::process::id()
    ));
    fs::create_dir_all(&dir).unwrap();

    let schema = json!({
        "settings": { "number_of_shards": 1 },
        "mappings": { "properties": { "id": { "type": "keyword" } } }
    });
    for (_, file) in MANAGED_INDICES {
        fs::write(dir.join(file), schema.to_string()).unwrap();
    }
    dir
}

fn create_test_provisioner(
    test_name: &str,
    preexisting: &[&str],
) -> (IndexProvisioner, Arc<Mutex<BTreeSet<String>>>) {
    let cluster = MockCluster::new(preexisting);
    let state = cluster.state();
    let provisioner = IndexProvisioner::new(Box::new(cluster), schema_dir(test_name));
    (provisioner, state)
}

#[tokio::test]
async fn test_full_provisioning_run() {
    let (provisioner, state) = create_test_provisioner("full-run", &["unrelated_docs"]);

    let summary = provisioner.setup_all_indices().await.unwrap();
    assert!(summary.all_succeeded());
    assert_eq!(summary.total, MANAGED_INDICES.len());
    assert_eq!(summary.succeeded, MANAGED_INDICES.len());

    // The cluster now holds the managed set plus the index that was already there
    let indices = provisioner.list_indices().await.unwrap();
    for (name, _) in MANAGED_INDICES {
        assert!(indices.contains(&name.to_string()), "missing {}", name);
    }
    assert!(indices.contains(&"unrelated_docs".to_string()));
    assert_eq!(state.lock().unwrap().len(), MANAGED_INDICES.len() + 1);
}

#[tokio::test]
async fn test_rerun_is_idempotent() {
    let (provisioner, state) = create_test_provisioner("rerun", &[]);

    let first = provisioner.setup_all_indices().await.unwrap();
    assert!(first.all_succeeded());

    let second = provisioner.setup_all_indices().await.unwrap();
    assert!(second.all_succeeded());
    assert!(second.results.iter().all(|r| r.already_existed));

    assert_eq!(state.lock().unwrap().len(), MANAGED_INDICES.len());
}

#[tokio::test]
async fn test_delete_leaves_unmanaged_indices_untouched() {
    let (provisioner, state) = create_test_provisioner("delete-unmanaged", &["unrelated_docs"]);

    provisioner.setup_all_indices().await.unwrap();

    let summary = provisioner.delete_all_indices().await.unwrap();
    assert_eq!(summary.deleted, MANAGED_INDICES.len());
    assert_eq!(summary.failed, 0);

    let remaining = state.lock().unwrap();
    assert_eq!(remaining.len(), 1);
    assert!(remaining.contains("unrelated_docs"));
}

#[tokio::test]
async fn test_delete_on_empty_cluster_skips_everything() {
    let (provisioner, state) = create_test_provisioner("delete-empty", &[]);

    let summary = provisioner.delete_all_indices().await.unwrap();
    assert_eq!(summary.deleted, 0);
    assert_eq!(summary.skipped, MANAGED_INDICES.len());
    assert_eq!(summary.failed, 0);

    assert!(state.lock().unwrap().is_empty());
}
