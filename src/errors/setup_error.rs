//! Setup error types.
//!
//! This module defines the unified error type for all index provisioning
//! operations, from configuration loading through remote index management.

use thiserror::Error;

/// Unified errors from index provisioning operations.
///
/// Used by the `IndexAdminProvider` trait and `IndexProvisioner` for all
/// operations against the cluster. Configuration errors are fatal at startup;
/// everything else is reported per-operation so the caller can decide
/// aggregation and exit-code policy.
#[derive(Debug, Clone, Error)]
pub enum SetupError {
    /// Missing or malformed environment credentials. Fatal at startup.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Cluster unreachable or rejected authentication.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Schema file missing or its content failed to parse.
    #[error("Schema load error: {0}")]
    SchemaLoadError(String),

    /// The cluster rejected a create, list, or delete call.
    #[error("Remote operation error: {0}")]
    RemoteOperationError(String),
}

impl SetupError {
    /// Create a configuration error.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::ConfigurationError(msg.into())
    }

    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create a schema load error.
    pub fn schema_load(msg: impl Into<String>) -> Self {
        Self::SchemaLoadError(msg.into())
    }

    /// Create a remote operation error.
    pub fn remote_operation(msg: impl Into<String>) -> Self {
        Self::RemoteOperationError(msg.into())
    }
}
