//! Upstream API configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Which upstream a request is sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientType {
    /// Anonymous public API.
    #[default]
    Public,
    /// Public API with the user's session.
    Authenticated,
    /// Server-only admin API.
    Admin,
}

impl ClientType {
    /// Get the name of this client type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Authenticated => "authenticated",
            Self::Admin => "admin",
        }
    }
}

impl std::fmt::Display for ClientType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Client configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the public API.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Base URL of the admin API.
    #[serde(default = "default_admin_base_url")]
    pub admin_base_url: String,

    /// Bearer token for the admin API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_token: Option<String>,

    /// Per-request timeout enforced by the transport.
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    /// Default revalidation window advertised on GET requests.
    #[serde(default = "default_revalidate_secs")]
    pub revalidate_secs: u64,
}

fn default_api_base_url() -> String {
    "https://api.light.so/v1".to_string()
}

fn default_admin_base_url() -> String {
    "https://api.light.so/admin/v1".to_string()
}

fn default_request_timeout_ms() -> u64 {
    10_000
}

fn default_revalidate_secs() -> u64 {
    300
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            admin_base_url: default_admin_base_url(),
            admin_token: None,
            request_timeout_ms: default_request_timeout_ms(),
            revalidate_secs: default_revalidate_secs(),
        }
    }
}

impl ClientConfig {
    /// Load config from a file, then apply environment overrides.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))?
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))?
        };

        Ok(config.with_env_overrides(|key| std::env::var(key).ok()))
    }

    /// Load from environment variables only.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides(|key| std::env::var(key).ok())
    }

    /// Apply `LIGHT_*` overrides from a variable lookup.
    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup("LIGHT_API_BASE_URL") {
            self.api_base_url = url;
        }
        if let Some(url) = lookup("LIGHT_ADMIN_BASE_URL") {
            self.admin_base_url = url;
        }
        if let Some(token) = lookup("LIGHT_ADMIN_TOKEN") {
            self.admin_token = Some(token);
        }
        self
    }

    /// Base URL for a client type, without a trailing slash.
    pub fn base_url(&self, client_type: ClientType) -> &str {
        match client_type {
            ClientType::Admin => self.admin_base_url.trim_end_matches('/'),
            _ => self.api_base_url.trim_end_matches('/'),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_toml() {
        let config: ClientConfig = toml::from_str("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.request_timeout_ms, 10_000);
    }

    #[test]
    fn test_partial_toml() {
        let config: ClientConfig = toml::from_str(
            r#"
api_base_url = "http://localhost:3000/"
admin_token = "secret"
"#,
        )
        .unwrap();
        assert_eq!(config.base_url(ClientType::Public), "http://localhost:3000");
        assert_eq!(config.base_url(ClientType::Authenticated), "http://localhost:3000");
        assert_eq!(config.base_url(ClientType::Admin), "https://api.light.so/admin/v1");
        assert_eq!(config.admin_token.as_deref(), Some("secret"));
    }

    #[test]
    fn test_env_overrides() {
        let config = ClientConfig::default().with_env_overrides(|key| match key {
            "LIGHT_ADMIN_BASE_URL" => Some("http://admin.local".to_string()),
            "LIGHT_ADMIN_TOKEN" => Some("token".to_string()),
            _ => None,
        });
        assert_eq!(config.base_url(ClientType::Admin), "http://admin.local");
        assert_eq!(config.admin_token.as_deref(), Some("token"));
        assert_eq!(config.api_base_url, "https://api.light.so/v1");
    }

    #[test]
    fn test_load_json_file() {
        let path = std::env::temp_dir().join(format!("light-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"request_timeout_ms": 250}"#).unwrap();

        let config = ClientConfig::load(&path).unwrap();
        assert_eq!(config.request_timeout_ms, 250);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_missing_file() {
        let err = ClientConfig::load("/nonexistent/light.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_client_type_serde() {
        assert_eq!(serde_json::to_string(&ClientType::Admin).unwrap(), "\"admin\"");
        assert_eq!(ClientType::default(), ClientType::Public);
    }
}
