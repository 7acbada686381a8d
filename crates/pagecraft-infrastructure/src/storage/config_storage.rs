//! Application configuration file storage.
//!
//! Loads `config.toml` from the config directory; a missing file yields the
//! default configuration so a fresh checkout runs without setup.

use crate::paths::PagecraftPaths;
use pagecraft_core::config::AppConfig;
use pagecraft_core::error::{PagecraftError, Result};
use std::fs;
use std::path::PathBuf;

/// Storage for the application configuration file (config.toml).
pub struct ConfigStorage {
    path: PathBuf,
}

impl ConfigStorage {
    /// Creates a ConfigStorage pointing at the default location
    /// (`<config dir>/pagecraft/config.toml`).
    pub fn new() -> Result<Self> {
        let path = PagecraftPaths::config_file()
            .map_err(|e| PagecraftError::config(e.to_string()))?;
        Ok(Self { path })
    }

    /// Creates a ConfigStorage with a custom path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the configuration, falling back to defaults when the file is
    /// absent.
    pub fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let storage = ConfigStorage::with_path(temp_dir.path().join("config.toml"));

        let config = storage.load().unwrap();
        assert_eq!(config.bind, "127.0.0.1:8000");
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "bind = \"0.0.0.0:9000\"\n").unwrap();

        let storage = ConfigStorage::with_path(path);
        let config = storage.load().unwrap();
        assert_eq!(config.bind, "0.0.0.0:9000");
        assert_eq!(config.allowed_origin, "http://localhost:3000");
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "bind = [broken").unwrap();

        let storage = ConfigStorage::with_path(path);
        assert!(storage.load().is_err());
    }
}
