//! Application and secret configuration models.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration, loaded from `config.toml` with defaults for
/// every field so a missing file means a usable local setup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Address the HTTP server binds to.
    pub bind: String,
    /// Base directory for persisted records and generated artifacts.
    /// Defaults to the platform data dir when absent.
    pub data_dir: Option<PathBuf>,
    /// Origin allowed by the CORS layer.
    pub allowed_origin: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8000".to_string(),
            data_dir: None,
            allowed_origin: "http://localhost:3000".to_string(),
        }
    }
}

/// A single API credential entry in `secret.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiCredential {
    pub api_key: String,
    #[serde(default)]
    pub model_name: Option<String>,
}

/// Secret configuration (`secret.json` in the config directory).
///
/// Every section is optional: a missing credential disables the matching
/// collaborator rather than failing startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SecretConfig {
    #[serde(default)]
    pub claude: Option<ApiCredential>,
    #[serde(default)]
    pub openai: Option<ApiCredential>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.bind, "127.0.0.1:8000");
        assert_eq!(config.allowed_origin, "http://localhost:3000");
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn test_secret_config_partial() {
        let json = r#"{ "claude": { "api_key": "sk-test" } }"#;
        let secrets: SecretConfig = serde_json::from_str(json).unwrap();
        assert_eq!(secrets.claude.unwrap().api_key, "sk-test");
        assert!(secrets.openai.is_none());
    }
}
