//! Top-level application configuration.
//!
//! Configuration is stored in `.dashnav/config.yaml` and includes:
//! - The dashboard GraphQL endpoint and the base URL used for navigation
//! - The API token
//! - Palette limits and label overrides

use std::collections::HashMap;
use std::env;
use std::fmt;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{DashnavError, Result};
use crate::intl::{MessageCatalog, MessageId};
use crate::paths::dashnav_root;

const DEFAULT_API_URL: &str = "http://localhost:8000/graphql/";
const DEFAULT_DASHBOARD_URL: &str = "http://localhost:9000/dashboard";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// GraphQL endpoint of the dashboard API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// Base URL that navigation paths are joined onto
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashboard_url: Option<String>,

    /// Authentication token
    #[serde(default)]
    pub auth: AuthConfig,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,

    /// Maximum number of actions offered in default mode (default: 5)
    #[serde(default = "default_max_actions")]
    pub max_actions: usize,

    /// Label overrides keyed by message id
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub messages: HashMap<MessageId, String>,
}

fn default_request_timeout() -> u64 {
    30
}

fn default_max_actions() -> usize {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: None,
            dashboard_url: None,
            auth: AuthConfig::default(),
            request_timeout: default_request_timeout(),
            max_actions: default_max_actions(),
            messages: HashMap::new(),
        }
    }
}

/// Authentication configuration
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> PathBuf {
        dashnav_root().join("config.yaml")
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            DashnavError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config at {}: {}", path.display(), e),
            ))
        })?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.max_actions == 0 {
            return Err(DashnavError::Config(
                "max_actions must be at least 1".to_string(),
            ));
        }
        if self.request_timeout == 0 {
            return Err(DashnavError::Config(
                "request_timeout must be at least 1 second".to_string(),
            ));
        }
        for (key, value) in [
            ("api_url", &self.api_url),
            ("dashboard_url", &self.dashboard_url),
        ] {
            if let Some(value) = value {
                url::Url::parse(value).map_err(|e| {
                    DashnavError::Config(format!("invalid {key} '{value}': {e}"))
                })?;
            }
        }
        Ok(())
    }

    /// GraphQL endpoint from environment, config file, or the local default
    pub fn api_url(&self) -> String {
        if let Ok(url) = env::var("DASHNAV_API_URL")
            && !url.is_empty()
        {
            return url;
        }

        self.api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }

    pub fn dashboard_url(&self) -> String {
        self.dashboard_url
            .clone()
            .unwrap_or_else(|| DEFAULT_DASHBOARD_URL.to_string())
    }

    /// Get the API token from environment variable or config
    pub fn token(&self) -> Option<String> {
        if let Ok(token) = env::var("DASHNAV_TOKEN")
            && !token.is_empty()
        {
            return Some(token);
        }

        self.auth.token.clone()
    }

    pub fn message_catalog(&self) -> MessageCatalog {
        MessageCatalog::with_overrides(self.messages.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_guards::EnvGuard;
    use serial_test::serial;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.api_url.is_none());
        assert!(config.auth.token.is_none());
        assert_eq!(config.request_timeout, 30);
        assert_eq!(config.max_actions, 5);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = "api_url: https://shop.example.com/graphql/\n";
        let config: Config = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(
            config.api_url.as_deref(),
            Some("https://shop.example.com/graphql/")
        );
        assert_eq!(config.request_timeout, 30);
        assert_eq!(config.max_actions, 5);
    }

    #[test]
    fn test_debug_redacts_token() {
        let mut config = Config::default();
        config.auth.token = Some("secret-token".to_string());
        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret-token"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_message_overrides_reach_catalog() {
        let yaml = "messages:\n  create_new_order: New draft\n";
        let config: Config = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(
            config.message_catalog().message(MessageId::CreateNewOrder),
            "New draft"
        );
    }

    #[test]
    #[serial]
    fn test_env_token_overrides_file() {
        let _guard = unsafe { EnvGuard::set("DASHNAV_TOKEN", "from-env") };
        let mut config = Config::default();
        config.auth.token = Some("from-file".to_string());
        assert_eq!(config.token().as_deref(), Some("from-env"));
    }

    #[test]
    #[serial]
    fn test_empty_env_token_falls_back() {
        let _guard = unsafe { EnvGuard::set("DASHNAV_TOKEN", "") };
        let mut config = Config::default();
        config.auth.token = Some("from-file".to_string());
        assert_eq!(config.token().as_deref(), Some("from-file"));
    }

    #[test]
    #[serial]
    fn test_load_missing_file_returns_default() {
        let tmp = tempfile::TempDir::new().unwrap();
        let _guard = unsafe { EnvGuard::set("DASHNAV_ROOT", tmp.path().join(".dashnav")) };

        let config = Config::load().unwrap();
        assert_eq!(config.max_actions, 5);
    }

    #[test]
    #[serial]
    fn test_load_from_root() {
        let tmp = tempfile::TempDir::new().unwrap();
        let root = tmp.path().join(".dashnav");
        fs::create_dir_all(&root).unwrap();
        fs::write(
            root.join("config.yaml"),
            "dashboard_url: https://shop.example.com/dashboard\nmax_actions: 3\n",
        )
        .unwrap();
        let _guard = unsafe { EnvGuard::set("DASHNAV_ROOT", &root) };

        let config = Config::load().unwrap();
        assert_eq!(config.dashboard_url(), "https://shop.example.com/dashboard");
        assert_eq!(config.max_actions, 3);
    }

    #[test]
    #[serial]
    fn test_load_rejects_zero_max_actions() {
        let tmp = tempfile::TempDir::new().unwrap();
        let root = tmp.path().join(".dashnav");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("config.yaml"), "max_actions: 0\n").unwrap();
        let _guard = unsafe { EnvGuard::set("DASHNAV_ROOT", &root) };

        assert!(matches!(Config::load(), Err(DashnavError::Config(_))));
    }

    #[test]
    #[serial]
    fn test_load_rejects_zero_request_timeout() {
        let tmp = tempfile::TempDir::new().unwrap();
        let root = tmp.path().join(".dashnav");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("config.yaml"), "request_timeout: 0\n").unwrap();
        let _guard = unsafe { EnvGuard::set("DASHNAV_ROOT", &root) };

        match Config::load() {
            Err(DashnavError::Config(message)) => assert!(message.contains("request_timeout")),
            other => panic!("expected config error, got {other:?}"),
        }
    }
}
