//! Configuration schema and type definitions

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for git-start
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub git: GitConfig,
    #[serde(default)]
    pub browser: BrowserConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Editor used to edit the starter template
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct EditorConfig {
    /// Editor command, e.g. "vim" or "code --wait"
    /// Falls back to $EDITOR, then vim
    #[serde(default)]
    pub command: Option<String>,
}

/// Git settings
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct GitConfig {
    /// Remote used to identify the repository and to push to
    /// Falls back to "origin", then the first remote
    #[serde(default)]
    pub remote: Option<String>,
}

/// Browser settings
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct BrowserConfig {
    /// Command that opens a URL; the URL is appended as the last argument
    #[serde(default)]
    pub command: Option<String>,
}

/// History storage settings
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct StorageConfig {
    /// Directory holding starter-option-storage.json
    /// Defaults to the git-start config directory
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

/// Template for global configuration file
const TEMPLATE_GLOBAL: &str = r#"# git-start configuration
# Location: ~/.config/git-start/config.toml

[editor]
# Command used to edit the branch/title template
# Falls back to $EDITOR, then vim
# command = "code --wait"

[git]
# Remote used to detect the GitHub repository and to push branches
# Falls back to "origin", then the first remote
# remote = "origin"

[browser]
# Command used to open the pull request page (the URL is appended)
# Defaults to open (macOS), start (Windows) or xdg-open
# command = "firefox"

[storage]
# Directory holding starter-option-storage.json
# Defaults to the directory of this file
# dir = "/path/to/dir"
"#;

impl Config {
    /// Get the global configuration template
    #[must_use]
    pub const fn template_global() -> &'static str {
        TEMPLATE_GLOBAL
    }
}
