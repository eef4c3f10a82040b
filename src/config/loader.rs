//! Configuration loading logic

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::schema::Config;
use crate::storage::STORAGE_FILE_NAME;

const APP_DIR: &str = "git-start";
const CONFIG_FILE_NAME: &str = "config.toml";

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Load the global configuration, or defaults if there is none
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be read or parsed
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                log::debug!("loading config from {}", path.display());
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Get the git-start config directory
    /// Respects `XDG_CONFIG_HOME` environment variable on all platforms.
    /// Fallback: `$HOME/.config/git-start`
    #[must_use]
    pub fn config_dir() -> Option<PathBuf> {
        let config_home = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .filter(|p| p.is_absolute())
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))?;

        Some(config_home.join(APP_DIR))
    }

    /// Get the global config path
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
    }

    /// Directory holding the history storage
    ///
    /// # Errors
    /// Returns an error if no directory is configured and HOME cannot be found
    pub fn history_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.storage.dir {
            return Ok(dir.clone());
        }

        Self::config_dir().context(
            "Could not determine config directory (HOME directory not found). \
             Please set the HOME environment variable or XDG_CONFIG_HOME.",
        )
    }

    /// Path of the history storage file
    ///
    /// # Errors
    /// See [`Config::history_dir`]
    pub fn history_path(&self) -> Result<PathBuf> {
        Ok(self.history_dir()?.join(STORAGE_FILE_NAME))
    }
}
