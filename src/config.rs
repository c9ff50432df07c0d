use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{GalleryError, Result};
use crate::state::catalog::read_json;
use crate::state::filter::PAGE_SIZE;

/// User settings, read from `config.json` in the user config directory.
/// Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Cards per page
    pub page_size: usize,
    /// Tags offered when a search finds nothing
    pub suggestion_limit: usize,
    /// Base for resolving site-relative project URLs
    pub site_url: String,
    /// Directory with `projects.json` and `categories.json`; built-in catalog when unset
    pub catalog_dir: Option<PathBuf>,
    /// Default log level when `RUST_LOG` is not set
    pub log_level: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE,
            suggestion_limit: 3,
            site_url: "http://localhost:5173/".to_string(),
            catalog_dir: None,
            log_level: "info".to_string(),
        }
    }
}

impl GalleryConfig {
    /// Where the config file lives:
    /// - Linux: ~/.config/project-gallery/config.json
    /// - macOS: ~/Library/Application Support/project-gallery/config.json
    /// - Windows: %APPDATA%\project-gallery\config.json
    pub fn default_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
        path.push("project-gallery");
        path.push("config.json");
        Some(path)
    }

    /// Load from the default location; a missing file yields the defaults
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let config: Self = read_json(path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(GalleryError::InvalidConfig(
                "page_size must be at least 1".to_string(),
            ));
        }
        if url::Url::parse(&self.site_url).is_err() {
            return Err(GalleryError::InvalidConfig(format!(
                "site_url '{}' is not an absolute URL",
                self.site_url
            )));
        }
        if self.log_level.parse::<log::LevelFilter>().is_err() {
            return Err(GalleryError::InvalidConfig(format!(
                "unknown log_level '{}'",
                self.log_level
            )));
        }
        Ok(())
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = GalleryConfig::default();
        assert_eq!(config.page_size, 6);
        assert!(config.validate().is_ok());
        assert_eq!(config.log_level(), log::LevelFilter::Info);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"page_size": 9, "log_level": "debug"}"#).unwrap();

        let config = GalleryConfig::load_from(&path).unwrap();
        assert_eq!(config.page_size, 9);
        assert_eq!(config.suggestion_limit, 3);
        assert_eq!(config.log_level(), log::LevelFilter::Debug);
        assert_eq!(config.catalog_dir, None);
    }

    #[test]
    fn test_rejects_zero_page_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"page_size": 0}"#).unwrap();

        let err = GalleryConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, GalleryError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_relative_site_url() {
        let config = GalleryConfig {
            site_url: "/just/a/path".to_string(),
            ..GalleryConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
