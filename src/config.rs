//! Cluster configuration loaded from the environment.

use std::env;

use url::Url;

use crate::errors::SetupError;

/// Environment variable holding the cluster endpoint URL.
pub const ELASTICSEARCH_URL_VAR: &str = "ELASTICSEARCH_URL";

/// Environment variable holding the API key credential.
pub const ELASTICSEARCH_API_KEY_VAR: &str = "ELASTICSEARCH_API_KEY";

/// API key credential presented to the cluster.
///
/// The credential shape is resolved once at configuration-load time: a value
/// containing a colon is split into an id/secret pair, anything else is
/// treated as a single pre-encoded token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiKey {
    /// A single opaque, pre-encoded API key token.
    Token(String),
    /// An API key id/secret pair, supplied as `id:secret`.
    KeyPair { id: String, secret: String },
}

impl ApiKey {
    /// Resolve the credential shape of a raw API key value.
    ///
    /// Splits at the first colon, so a secret may itself contain colons.
    pub fn parse(raw: &str) -> Self {
        match raw.split_once(':') {
            Some((id, secret)) => Self::KeyPair {
                id: id.to_string(),
                secret: secret.to_string(),
            },
            None => Self::Token(raw.to_string()),
        }
    }
}

/// Connection settings for the target search cluster.
///
/// Loaded once per run; immutable afterwards. Construction fails fast with a
/// [`SetupError::ConfigurationError`] if either value is absent, empty, or
/// the URL does not parse. No network activity happens before that check.
#[derive(Debug, Clone)]
pub struct ClusterConfig {
    /// The cluster endpoint.
    pub url: Url,
    /// The API key credential.
    pub api_key: ApiKey,
}

impl ClusterConfig {
    /// Load the cluster configuration from the process environment.
    pub fn from_env() -> Result<Self, SetupError> {
        Self::from_values(
            env::var(ELASTICSEARCH_URL_VAR).ok(),
            env::var(ELASTICSEARCH_API_KEY_VAR).ok(),
        )
    }

    /// Build the configuration from raw values.
    ///
    /// Empty strings are treated the same as unset variables.
    pub fn from_values(
        url: Option<String>,
        api_key: Option<String>,
    ) -> Result<Self, SetupError> {
        let url = url.filter(|v| !v.is_empty()).ok_or_else(|| {
            SetupError::configuration(format!("{} must be set", ELASTICSEARCH_URL_VAR))
        })?;
        let api_key = api_key.filter(|v| !v.is_empty()).ok_or_else(|| {
            SetupError::configuration(format!("{} must be set", ELASTICSEARCH_API_KEY_VAR))
        })?;

        let url = Url::parse(&url).map_err(|e| {
            SetupError::configuration(format!("Invalid {}: {}", ELASTICSEARCH_URL_VAR, e))
        })?;

        Ok(Self {
            url,
            api_key: ApiKey::parse(&api_key),
        })
    }
}
