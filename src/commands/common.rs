//! Helpers shared by command handlers

use anyhow::Result;
use std::path::{Component, Path, PathBuf};

use crate::config::Config;
use crate::context::RepoContext;
use crate::integrations::git::RealGitClient;

/// Load the configuration and resolve the repository context from git
///
/// # Errors
/// Returns an error if the configuration is malformed or the current
/// directory is not a checkout of a GitHub repository
pub fn load_context() -> Result<(Config, RepoContext)> {
    let config = Config::load()?;
    let ctx = RepoContext::detect(&RealGitClient, &config)?;
    Ok((config, ctx))
}

/// Convert a path to home-relative display format
///
/// Returns "~/path" if under the home directory, otherwise the path itself.
/// `.` and `..` components are resolved lexically.
#[must_use]
pub fn display_path(path: &Path) -> String {
    let normalized = normalize_lexically(path);

    if let Some(rel) = dirs::home_dir()
        .as_deref()
        .and_then(|home| normalized.strip_prefix(home).ok())
    {
        if rel.as_os_str().is_empty() {
            return "~".to_string();
        }
        return format!("~/{}", rel.display());
    }

    normalized.display().to_string()
}

fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            _ => normalized.push(component),
        }
    }
    normalized
}
