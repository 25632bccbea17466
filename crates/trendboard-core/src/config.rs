//! Dashboard configuration
//!
//! Stored as TOML in `<config_dir>/trendboard/config.toml`. A missing file
//! means defaults; a file that exists but does not parse is an error.

use crate::error::CoreError;
use crate::tabs::Tab;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_PORT: u16 = 3333;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Base URL of the analytics backend (no trailing slash)
    pub backend_url: String,
    /// Dev server port
    pub port: u16,
    /// Trunk output directory served by the dev server
    pub dist_dir: PathBuf,
    /// Tab `snapshot` loads when `--tab` is not given
    pub default_tab: Tab,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            port: DEFAULT_PORT,
            dist_dir: PathBuf::from("crates/trendboard-web/dist"),
            default_tab: Tab::Trends,
        }
    }
}

impl DashboardConfig {
    /// `<config_dir>/trendboard/config.toml`, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("trendboard").join("config.toml"))
    }

    /// Load from `path`; a missing file yields defaults
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(CoreError::ConfigIo {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let config: Self = toml::from_str(&content).map_err(|e| CoreError::InvalidConfig {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        config.validate(path)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), CoreError> {
        let io_err = |source| CoreError::ConfigIo {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let content = toml::to_string_pretty(self).map_err(|e| CoreError::InvalidConfig {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, content).map_err(io_err)
    }

    /// Backend URL without a trailing slash
    pub fn backend_base(&self) -> &str {
        self.backend_url.trim_end_matches('/')
    }

    fn validate(&self, path: &Path) -> Result<(), CoreError> {
        if let Err(e) = url::Url::parse(&self.backend_url) {
            return Err(CoreError::InvalidConfig {
                path: path.to_path_buf(),
                message: format!("backend_url '{}': {}", self.backend_url, e),
            });
        }
        if self.port == 0 {
            return Err(CoreError::InvalidConfig {
                path: path.to_path_buf(),
                message: "port must be non-zero".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = DashboardConfig::load(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "backend_url = \"http://analytics:8000/\"\ndefault_tab = \"predictive\"\n").unwrap();

        let config = DashboardConfig::load(&path).unwrap();
        assert_eq!(config.backend_base(), "http://analytics:8000");
        assert_eq!(config.default_tab, Tab::Predictive);
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn test_invalid_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        std::fs::write(&path, "port = \"abc\"").unwrap();
        assert!(matches!(
            DashboardConfig::load(&path),
            Err(CoreError::InvalidConfig { .. })
        ));

        std::fs::write(&path, "backend_url = \"not a url\"").unwrap();
        assert!(matches!(
            DashboardConfig::load(&path),
            Err(CoreError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = DashboardConfig {
            port: 8088,
            default_tab: Tab::Items,
            ..Default::default()
        };
        config.save(&path).unwrap();
        assert_eq!(DashboardConfig::load(&path).unwrap(), config);
    }
}
