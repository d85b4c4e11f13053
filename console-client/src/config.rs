//! Client configuration for the organization service.
//!
//! Provides the base URL, request timeout and default parent organization
//! used by the transport and the organization service. Configuration is
//! loaded from environment variables with sensible defaults for local
//! development.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Parent organization used when a create call does not name one.
pub const DEFAULT_PARENT_ORG_UUID: &str = "55cb6fcf-e902-445d-ba00-e51a3b7c216f";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue {
        /// Configuration key.
        key: String,
        /// Error message.
        message: String,
    },
}

/// Deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Some(Environment::Development),
            "production" | "prod" => Some(Environment::Production),
            _ => None,
        }
    }
}

/// Configuration for the console API client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the API gateway (e.g., "https://api.example.com").
    pub base_url: String,

    /// Request timeout in milliseconds.
    pub timeout_ms: u64,

    /// Parent organization UUID used when creating without an explicit parent.
    pub parent_org_uuid: String,

    /// Deployment environment.
    pub environment: Environment,
}

impl Default for ClientConfig {
    /// Returns default configuration suitable for local development.
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/api".to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            parent_org_uuid: DEFAULT_PARENT_ORG_UUID.to_string(),
            environment: Environment::Development,
        }
    }
}

impl ClientConfig {
    /// Create a configuration for a base URL with default settings.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CONSOLE_API_BASE_URL`: API base URL (default: http://localhost:8080/api)
    /// - `CONSOLE_API_TIMEOUT_MS`: Request timeout in milliseconds (default: 10000)
    /// - `CONSOLE_PARENT_ORG_UUID`: Default parent organization UUID
    /// - `CONSOLE_ENV`: `development` or `production` (default: development)
    ///
    /// Unparseable values fall back to the defaults; call [`validate`](Self::validate)
    /// to reject bad settings.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default = Self::default();

        Self {
            base_url: lookup("CONSOLE_API_BASE_URL").unwrap_or(default.base_url),
            timeout_ms: lookup("CONSOLE_API_TIMEOUT_MS")
                .and_then(|s| s.trim().parse().ok())
                .filter(|ms| *ms > 0)
                .unwrap_or(default.timeout_ms),
            parent_org_uuid: lookup("CONSOLE_PARENT_ORG_UUID").unwrap_or(default.parent_org_uuid),
            environment: lookup("CONSOLE_ENV")
                .and_then(|s| Environment::parse(&s))
                .unwrap_or(default.environment),
        }
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the default parent organization.
    pub fn with_parent_org_uuid(mut self, uuid: impl Into<String>) -> Self {
        self.parent_org_uuid = uuid.into();
        self
    }

    /// Get the request timeout as a Duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Build a full URL by appending a path to the base URL.
    ///
    /// A trailing slash on `path` is kept.
    pub fn url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = self.base_url.trim();
        if base.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "base_url".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                key: "base_url".to_string(),
                message: format!("expected an http(s) URL, got {:?}", self.base_url),
            });
        }
        if self.is_production() && base.starts_with("http://") {
            return Err(ConfigError::InvalidValue {
                key: "base_url".to_string(),
                message: "production requires https".to_string(),
            });
        }
        if self.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                key: "timeout_ms".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        Uuid::parse_str(&self.parent_org_uuid).map_err(|e| ConfigError::InvalidValue {
            key: "parent_org_uuid".to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout_ms, 10_000);
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.parent_org_uuid, DEFAULT_PARENT_ORG_UUID);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_lookup_reads_overrides() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("CONSOLE_API_BASE_URL", "https://api.example.com"),
            ("CONSOLE_API_TIMEOUT_MS", "2500"),
            ("CONSOLE_ENV", "production"),
        ]));

        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.timeout_ms, 2500);
        assert!(config.is_production());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_lookup_falls_back_on_bad_values() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("CONSOLE_API_TIMEOUT_MS", "soon"),
            ("CONSOLE_ENV", "staging"),
        ]));

        assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);
        assert_eq!(config.environment, Environment::Development);
    }

    #[test]
    fn test_url_joining() {
        let config = ClientConfig::new("https://api.example.com/");

        assert_eq!(
            config.url("/organization-service/organizations/uuid/x"),
            "https://api.example.com/organization-service/organizations/uuid/x"
        );
        assert_eq!(
            config.url("organization-service/organizations/"),
            "https://api.example.com/organization-service/organizations/"
        );
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        match ClientConfig::new("  ").validate() {
            Err(ConfigError::InvalidValue { key, message }) => {
                assert_eq!(key, "base_url");
                assert_eq!(message, "must not be empty");
            }
            other => panic!("expected invalid base_url, got {:?}", other),
        }
        assert!(ClientConfig::new("/api").validate().is_err());
        assert!(ClientConfig::new("http://x")
            .with_parent_org_uuid("not-a-uuid")
            .validate()
            .is_err());

        let mut config = ClientConfig::new("http://x");
        config.timeout_ms = 0;
        assert!(config.validate().is_err());

        config = ClientConfig::new("http://x");
        config.environment = Environment::Production;
        assert!(config.validate().is_err());
    }
}
