//! Elasticsearch provider implementation.
//!
//! This module provides the concrete implementation of `IndexAdminProvider`
//! using the official Elasticsearch Rust client.

use async_trait::async_trait;
use elasticsearch::{
    auth::Credentials,
    cat::CatIndicesParts,
    http::transport::{SingleNodeConnectionPool, TransportBuilder},
    indices::{IndicesCreateParts, IndicesDeleteParts, IndicesExistsParts},
    Elasticsearch,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, error, info};

use crate::config::{ApiKey, ClusterConfig};
use crate::errors::SetupError;
use crate::interfaces::IndexAdminProvider;
use crate::types::ClusterInfo;

/// Elasticsearch provider implementation.
///
/// Holds a single-node client authenticated with the configured API key.
/// Timeout policy is left to the client's defaults.
pub struct ElasticsearchProvider {
    client: Elasticsearch,
}

/// Shape of the root info endpoint response, reduced to the fields we report.
#[derive(Debug, Deserialize)]
struct InfoResponse {
    cluster_name: String,
    version: InfoVersion,
}

#[derive(Debug, Deserialize)]
struct InfoVersion {
    number: String,
}

impl ElasticsearchProvider {
    /// Create a new provider connected to the configured cluster.
    ///
    /// # Arguments
    ///
    /// * `config` - Endpoint URL and API key credential
    ///
    /// # Returns
    ///
    /// * `Ok(ElasticsearchProvider)` - A new provider instance
    /// * `Err(SetupError)` - If transport setup fails
    pub fn new(config: &ClusterConfig) -> Result<Self, SetupError> {
        let conn_pool = SingleNodeConnectionPool::new(config.url.clone());

        let credentials = match &config.api_key {
            ApiKey::Token(token) => Credentials::EncodedApiKey(token.clone()),
            ApiKey::KeyPair { id, secret } => Credentials::ApiKey(id.clone(), secret.clone()),
        };

        let transport = TransportBuilder::new(conn_pool)
            .auth(credentials)
            .disable_proxy()
            .build()
            .map_err(|e| SetupError::connection(e.to_string()))?;

        let client = Elasticsearch::new(transport);

        info!(url = %config.url, "Created Elasticsearch provider");

        Ok(Self { client })
    }

    /// Extract index names from a `_cat/indices` JSON response.
    fn parse_index_names(rows: &[Value]) -> Vec<String> {
        rows.iter()
            .filter_map(|row| row.get("index").and_then(Value::as_str))
            .map(str::to_string)
            .collect()
    }
}

#[async_trait]
impl IndexAdminProvider for ElasticsearchProvider {
    async fn cluster_info(&self) -> Result<ClusterInfo, SetupError> {
        let response = self
            .client
            .info()
            .send()
            .await
            .map_err(|e| SetupError::connection(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Cluster info request failed");
            return Err(SetupError::connection(format!(
                "Cluster info failed with status {}: {}",
                status, error_body
            )));
        }

        let parsed: InfoResponse = response
            .json()
            .await
            .map_err(|e| SetupError::connection(e.to_string()))?;

        Ok(ClusterInfo {
            cluster_name: parsed.cluster_name,
            version: parsed.version.number,
        })
    }

    async fn index_exists(&self, name: &str) -> Result<bool, SetupError> {
        let response = self
            .client
            .indices()
            .exists(IndicesExistsParts::Index(&[name]))
            .send()
            .await
            .map_err(|e| SetupError::remote_operation(e.to_string()))?;

        let status = response.status_code();
        if status.is_success() {
            return Ok(true);
        }
        if status.as_u16() == 404 {
            return Ok(false);
        }

        let error_body = response.text().await.unwrap_or_default();
        error!(status = %status, body = %error_body, "Index exists check failed");
        Err(SetupError::remote_operation(format!(
            "Exists check for '{}' failed with status {}: {}",
            name, status, error_body
        )))
    }

    async fn create_index(&self, name: &str, schema: &Value) -> Result<(), SetupError> {
        let response = self
            .client
            .indices()
            .create(IndicesCreateParts::Index(name))
            .body(schema)
            .send()
            .await
            .map_err(|e| SetupError::remote_operation(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Create index request failed");
            return Err(SetupError::remote_operation(format!(
                "Create of '{}' failed with status {}: {}",
                name, status, error_body
            )));
        }

        debug!(index = %name, "Index created");
        Ok(())
    }

    async fn list_indices(&self) -> Result<Vec<String>, SetupError> {
        let response = self
            .client
            .cat()
            .indices(CatIndicesParts::Index(&["*"]))
            .format("json")
            .send()
            .await
            .map_err(|e| SetupError::remote_operation(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "List indices request failed");
            return Err(SetupError::remote_operation(format!(
                "List indices failed with status {}: {}",
                status, error_body
            )));
        }

        let rows: Vec<Value> = response
            .json()
            .await
            .map_err(|e| SetupError::remote_operation(e.to_string()))?;

        Ok(Self::parse_index_names(&rows))
    }

    async fn delete_index(&self, name: &str) -> Result<(), SetupError> {
        let response = self
            .client
            .indices()
            .delete(IndicesDeleteParts::Index(&[name]))
            .send()
            .await
            .map_err(|e| SetupError::remote_operation(e.to_string()))?;

        let status = response.status_code();

        // 404 is acceptable - index may not exist
        if !status.is_success() && status.as_u16() != 404 {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Delete index request failed");
            return Err(SetupError::remote_operation(format!(
                "Delete of '{}' failed with status {}: {}",
                name, status, error_body
            )));
        }

        debug!(index = %name, "Index deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_index_names() {
        let rows = vec![
            json!({"health": "green", "index": "regulations", "docs.count": "0"}),
            json!({"health": "yellow", "index": "permits", "docs.count": "12"}),
        ];

        let names = ElasticsearchProvider::parse_index_names(&rows);

        assert_eq!(names, vec!["regulations".to_string(), "permits".to_string()]);
    }

    #[test]
    fn test_parse_index_names_skips_malformed_rows() {
        let rows = vec![
            json!({"index": "inspections"}),
            json!({"health": "green"}),
            json!({"index": 42}),
        ];

        let names = ElasticsearchProvider::parse_index_names(&rows);

        assert_eq!(names, vec!["inspections".to_string()]);
    }
}
