use crate::presentation::{OutputEncoding, RenderOptions};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_FIELD_LIMIT: usize = 100;

/// Resolve the config file path based on priority:
/// 1. Explicit path (--config flag, with tilde expansion)
/// 2. TASKTREE_CONFIG environment variable (with tilde expansion)
/// 3. XDG config directory
pub fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(expand_tilde(&path.to_string_lossy()));
    }

    if let Ok(env_path) = std::env::var("TASKTREE_CONFIG") {
        return Some(expand_tilde(&env_path));
    }

    dirs::config_dir().map(|dir| dir.join("tasktree").join("config.toml"))
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

/// Persistent defaults; every key is optional and command-line flags win.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub field_limit: Option<usize>,
    #[serde(default)]
    pub ignored_keys: Option<Vec<String>>,
    #[serde(default)]
    pub encoding: Option<String>,
    #[serde(default)]
    pub human_readable: Option<bool>,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    pub fn encoding(&self) -> Result<Option<OutputEncoding>> {
        self.encoding
            .as_deref()
            .map(|name| name.parse::<OutputEncoding>())
            .transpose()
            .context("Invalid 'encoding' in config")
    }

    /// Render options from the file alone, before flags are applied.
    pub fn render_options(&self) -> Result<RenderOptions> {
        Ok(RenderOptions {
            field_limit: self.field_limit.unwrap_or(DEFAULT_FIELD_LIMIT),
            ignored_keys: self
                .ignored_keys
                .as_ref()
                .map(|keys| keys.iter().cloned().collect()),
            encoding: self.encoding()?.unwrap_or_default(),
        })
    }

    pub fn human_readable(&self) -> bool {
        self.human_readable.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        let options = config.render_options().unwrap();
        assert_eq!(options.field_limit, DEFAULT_FIELD_LIMIT);
        assert!(options.ignored_keys.is_none());
        assert_eq!(options.encoding, OutputEncoding::Utf8);
        assert!(config.human_readable());
    }

    #[test]
    fn test_config_round_trip() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");

        let config = Config {
            field_limit: Some(0),
            ignored_keys: Some(vec!["task_uuid".to_string()]),
            encoding: Some("ascii".to_string()),
            human_readable: Some(false),
        };
        std::fs::write(&config_path, toml::to_string_pretty(&config)?)?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);

        let options = loaded.render_options()?;
        assert_eq!(options.field_limit, 0);
        assert_eq!(options.encoding, OutputEncoding::Ascii);
        assert!(options.ignored_keys.unwrap().contains("task_uuid"));

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert_eq!(config, Config::default());

        Ok(())
    }

    #[test]
    fn test_invalid_encoding_is_reported() {
        let config = Config {
            encoding: Some("klingon".to_string()),
            ..Config::default()
        };
        let err = config.render_options().unwrap_err();
        assert!(format!("{:#}", err).contains("unknown encoding 'klingon'"));
    }

    #[test]
    fn test_unknown_keys_rejected() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "field_limt = 3\n")?;

        assert!(Config::load_from(&config_path).is_err());
        Ok(())
    }

    #[test]
    fn test_explicit_path_wins() {
        let path = resolve_config_path(Some(Path::new("/tmp/custom.toml")));
        assert_eq!(path, Some(PathBuf::from("/tmp/custom.toml")));
    }
}
