//! Target configuration types
//!
//! Defines the structure of the configuration file and how it turns into an
//! `ApiClient` and a `CheckContext`.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use crate::checks::{CheckContext, DEFAULT_CLIENT_NAME_PREFIX};
use crate::client::ApiClient;

/// Base URL used when nothing overrides it
pub const DEFAULT_BASE_URL: &str =
    "https://76573a15-ab35-4239-a4a1-8ef15228d817.preview.emergentagent.com/api";

/// Environment variable overriding the base URL
pub const BASE_URL_ENV: &str = "STATUSPROBE_BASE_URL";

/// Errors that can occur during configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to create client: {0}")]
    Client(#[from] crate::client::ApiError),
}

/// The API under test
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Root all check paths are resolved against
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout; the HTTP client default when unset
    #[serde(
        default,
        with = "humantime_serde",
        skip_serializing_if = "Option::is_none"
    )]
    pub timeout: Option<Duration>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: None,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub target: TargetConfig,

    /// Prefix of the generated client name (`<prefix>_HHMMSS`)
    #[serde(default = "default_client_name_prefix")]
    pub client_name_prefix: String,
}

fn default_client_name_prefix() -> String {
    DEFAULT_CLIENT_NAME_PREFIX.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target: TargetConfig::default(),
            client_name_prefix: default_client_name_prefix(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if given, otherwise start from defaults
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }

    /// Replace the base URL when an override (flag or environment) is present
    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url {
            self.target.base_url = url;
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = url::Url::parse(&self.target.base_url).map_err(|e| {
            ConfigError::Invalid(format!("base_url {:?}: {e}", self.target.base_url))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid(format!(
                "base_url must be http or https, got {}",
                url.scheme()
            )));
        }
        if self.client_name_prefix.is_empty() {
            return Err(ConfigError::Invalid(
                "client_name_prefix must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Build the HTTP client for the target
    pub fn to_client(&self) -> Result<ApiClient, ConfigError> {
        self.validate()?;
        let client = match self.target.timeout {
            Some(timeout) => ApiClient::with_timeout(&self.target.base_url, timeout)?,
            None => ApiClient::new(&self.target.base_url)?,
        };
        Ok(client)
    }

    /// Build a context with a client name stamped from the wall clock
    pub fn to_check_context(&self) -> CheckContext {
        CheckContext::from_clock(&self.client_name_prefix)
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CONFIG: &str = r"
target:
  base_url: http://localhost:8001/api
  timeout: 10s
client_name_prefix: probe
";

    #[test]
    fn test_parse_config() {
        let config = Config::from_yaml(SAMPLE_CONFIG).unwrap();
        assert_eq!(config.target.base_url, "http://localhost:8001/api");
        assert_eq!(config.target.timeout, Some(Duration::from_secs(10)));
        assert_eq!(config.client_name_prefix, "probe");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_yaml("{}").unwrap();
        assert_eq!(config.target.base_url, DEFAULT_BASE_URL);
        assert!(config.target.timeout.is_none());
        assert_eq!(config.client_name_prefix, "test_client");
    }

    #[test]
    fn test_override_beats_file() {
        let config = Config::from_yaml(SAMPLE_CONFIG)
            .unwrap()
            .with_base_url(Some("http://override:9000/api".to_string()));
        assert_eq!(config.target.base_url, "http://override:9000/api");

        let config = Config::from_yaml(SAMPLE_CONFIG).unwrap().with_base_url(None);
        assert_eq!(config.target.base_url, "http://localhost:8001/api");
    }

    #[test]
    fn test_invalid_base_url() {
        let err = Config::from_yaml("target:\n  base_url: not-a-url\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = Config::from_yaml("target:\n  base_url: ftp://host/api\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_empty_prefix_rejected() {
        let err = Config::from_yaml("client_name_prefix: ''\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_override_is_validated_by_to_client() {
        let config = Config::default().with_base_url(Some("nope".to_string()));
        assert!(config.to_client().is_err());
    }

    #[test]
    fn test_to_client() {
        let config = Config::from_yaml(SAMPLE_CONFIG).unwrap();
        let client = config.to_client().unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:8001/api");
    }

    #[test]
    fn test_context_uses_prefix() {
        let config = Config::from_yaml(SAMPLE_CONFIG).unwrap();
        assert!(config.to_check_context().client_name.starts_with("probe_"));
    }

    #[test]
    fn test_roundtrip() {
        let config = Config::from_yaml(SAMPLE_CONFIG).unwrap();
        let yaml = config.to_yaml().unwrap();
        let parsed = Config::from_yaml(&yaml).unwrap();
        assert_eq!(config.target.base_url, parsed.target.base_url);
        assert_eq!(config.target.timeout, parsed.target.timeout);
    }
}
