//! Unified path management for pagecraft configuration and data files.
//!
//! Configuration (config.toml, secret.json) lives under the platform config
//! directory; persisted records and generated artifacts live under a data
//! directory that the application config may override.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/pagecraft/             # Config directory
//! ├── config.toml                  # Application configuration
//! └── secret.json                  # API keys
//!
//! <data dir>/                      # ~/.local/share/pagecraft by default
//! ├── sessions/                    # Session records (one JSON per session)
//! ├── templates/                   # Template registry records
//! ├── history/                     # Generation history records
//! ├── analyses/                    # Reference analysis records
//! ├── generated_images/            # Rasterized detail pages
//! └── screenshots/                 # Reference page captures
//! ```

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Resolved data-directory layout for one running instance.
#[derive(Debug, Clone)]
pub struct PagecraftPaths {
    base: PathBuf,
}

impl PagecraftPaths {
    /// Resolves the data layout, preferring an explicit base directory from
    /// configuration over the platform default.
    pub fn resolve(data_dir: Option<PathBuf>) -> Result<Self, PathError> {
        let base = match data_dir {
            Some(dir) => dir,
            None => dirs::data_dir()
                .ok_or(PathError::HomeDirNotFound)?
                .join("pagecraft"),
        };
        Ok(Self { base })
    }

    /// Uses an explicit base directory (tests, ad-hoc setups).
    pub fn with_base(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Returns the pagecraft configuration directory.
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("pagecraft"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to config.toml.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to secret.json.
    pub fn secret_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("secret.json"))
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base
    }

    pub fn sessions_dir(&self) -> PathBuf {
        self.base.join("sessions")
    }

    pub fn templates_dir(&self) -> PathBuf {
        self.base.join("templates")
    }

    pub fn history_dir(&self) -> PathBuf {
        self.base.join("history")
    }

    pub fn analyses_dir(&self) -> PathBuf {
        self.base.join("analyses")
    }

    pub fn generated_images_dir(&self) -> PathBuf {
        self.base.join("generated_images")
    }

    pub fn screenshots_dir(&self) -> PathBuf {
        self.base.join("screenshots")
    }

    /// Creates the artifact directories that are written to outside the
    /// repository layer (screenshots, rasterized pages).
    pub async fn ensure_artifact_dirs(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(self.generated_images_dir()).await?;
        tokio::fs::create_dir_all(self.screenshots_dir()).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_base_layout() {
        let paths = PagecraftPaths::with_base("/tmp/pagecraft-test");
        assert_eq!(
            paths.sessions_dir(),
            PathBuf::from("/tmp/pagecraft-test/sessions")
        );
        assert_eq!(
            paths.generated_images_dir(),
            PathBuf::from("/tmp/pagecraft-test/generated_images")
        );
    }

    #[test]
    fn test_config_override_wins() {
        let paths = PagecraftPaths::resolve(Some(PathBuf::from("/srv/pagecraft"))).unwrap();
        assert_eq!(paths.base_dir(), &PathBuf::from("/srv/pagecraft"));
    }
}
