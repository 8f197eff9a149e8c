use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use spexplorer_graph::{DEFAULT_GRAPH_BASE_URL, GraphSettings};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment label shown in the page header when the config omits one.
pub const DEFAULT_ENVIRONMENT: &str = "PRODUÇÃO CCO";

const DATA_DIR_ENV_VAR: &str = "SPEXPLORER_PATH";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Resolve the data directory (config file and TUI log) based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. SPEXPLORER_PATH environment variable (with tilde expansion)
/// 3. XDG data directory
/// 4. ~/.spexplorer
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    let env_path = std::env::var(DATA_DIR_ENV_VAR).ok();
    resolve_data_dir_from(explicit_path, env_path.as_deref())
}

fn resolve_data_dir_from(explicit_path: Option<&str>, env_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Some(path) = env_path.filter(|p| !p.is_empty()) {
        return Ok(expand_tilde(path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("spexplorer"));
    }

    if let Some(home) = dirs::home_dir() {
        return Ok(home.join(".spexplorer"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

fn default_environment() -> String {
    DEFAULT_ENVIRONMENT.to_string()
}

fn default_base_url() -> String {
    DEFAULT_GRAPH_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub site_id: String,
    #[serde(default)]
    pub lists: Vec<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            site_id: String::new(),
            lists: Vec::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_environment")]
    pub environment: String,
    #[serde(default)]
    pub graph: GraphConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: default_environment(),
            graph: GraphConfig::default(),
            auth: AuthConfig::default(),
        }
    }
}

impl Config {
    pub fn default_path(data_dir: &Path) -> PathBuf {
        data_dir.join("config.toml")
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Starter config written by `spexplorer init`.
    pub fn template() -> Self {
        Self {
            graph: GraphConfig {
                site_id: concat!(
                    "contoso.sharepoint.com,",
                    "00000000-0000-0000-0000-000000000000,",
                    "00000000-0000-0000-0000-000000000000"
                )
                .to_string(),
                lists: vec!["Tarefas".to_string(), "Riscos".to_string()],
                ..GraphConfig::default()
            },
            ..Self::default()
        }
    }

    pub fn graph_settings(&self) -> GraphSettings {
        GraphSettings {
            base_url: self.graph.base_url.clone(),
            site_id: self.graph.site_id.clone(),
            lists: self.graph.lists.clone(),
            timeout: Duration::from_secs(self.graph.timeout_secs.max(1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.environment, "PRODUÇÃO CCO");
        assert_eq!(config.graph.base_url, "https://graph.microsoft.com/v1.0");
        assert_eq!(config.graph.timeout_secs, 30);
        assert!(config.auth.fallback_token.is_none());
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::template();
        config.auth.fallback_token = Some("fallback".to_string());
        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);
        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::load_from(&temp_dir.path().join("missing.toml"))?;
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn test_partial_config_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[graph]\nsite_id = \"root\"\nlists = [\"Tasks\"]\n")?;

        let config = Config::load_from(&path)?;
        assert_eq!(config.environment, DEFAULT_ENVIRONMENT);
        assert_eq!(config.graph.site_id, "root");
        assert_eq!(config.graph.lists, vec!["Tasks".to_string()]);
        assert_eq!(config.graph.timeout_secs, 30);
        Ok(())
    }

    #[test]
    fn test_invalid_toml_is_config_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "environment = [")?;

        assert!(matches!(Config::load_from(&path), Err(Error::Config(_))));
        Ok(())
    }

    #[test]
    fn test_graph_settings_clamps_zero_timeout() {
        let mut config = Config::template();
        config.graph.timeout_secs = 0;
        assert_eq!(config.graph_settings().timeout, Duration::from_secs(1));
    }

    #[test]
    fn test_data_dir_priority() -> Result<()> {
        assert_eq!(
            resolve_data_dir_from(Some("/explicit"), Some("/from-env"))?,
            PathBuf::from("/explicit")
        );
        assert_eq!(
            resolve_data_dir_from(None, Some("/from-env"))?,
            PathBuf::from("/from-env")
        );
        Ok(())
    }
}
