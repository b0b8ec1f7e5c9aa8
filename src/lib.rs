//! # Compliance Search Setup
//!
//! This crate provisions the Elasticsearch indices used for compliance
//! tracking. It loads cluster credentials from the environment, creates the
//! managed index set from local JSON schema files, and can list or delete
//! those indices. It includes definitions for errors, interfaces, and a
//! concrete implementation for Elasticsearch.

pub mod config;
pub mod elasticsearch;
pub mod errors;
pub mod interfaces;
pub mod provisioner;
pub mod types;

pub use config::{ApiKey, ClusterConfig};
pub use elasticsearch::ElasticsearchProvider;
pub use errors::SetupError;
pub use interfaces::IndexAdminProvider;
pub use provisioner::{IndexProvisioner, MANAGED_INDICES};
pub use types::{
    ClusterInfo, DeleteSummary, IndexDeleteResult, IndexOutcome, IndexSetupResult, SetupSummary,
};
