//! Repository context
//!
//! Everything the commands need to know about the current checkout, resolved
//! once at startup and passed around by reference.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::config::Config;
use crate::domain::repository::Repository;
use crate::integrations::git::{select_remote, GitClient};
use crate::storage::HistoryStorage;

/// Current repository, branch and history location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoContext {
    /// Remote used to identify the repository and to push to
    pub remote: String,
    pub remote_url: String,
    pub current_branch: String,
    pub repository: Repository,
    /// Path of the history storage file
    pub history_path: PathBuf,
}

impl RepoContext {
    /// Resolve the context from git and the loaded configuration
    ///
    /// # Errors
    /// Returns an error if there is no usable remote, the remote is not on
    /// GitHub, HEAD is detached, or the history location cannot be determined
    pub fn detect<G: GitClient>(git: &G, config: &Config) -> Result<Self> {
        let remotes = git.remotes()?;
        let remote = select_remote(&remotes, config.git.remote.as_deref())?;
        let remote_url = git.remote_url(&remote)?;
        let repository = Repository::from_remote_url(&remote_url)?;
        let current_branch = git.current_branch()?;
        let history_path = config.history_path()?;

        log::debug!(
            "repository {}/{}/{} on branch {current_branch} (remote {remote})",
            repository.hosting,
            repository.owner,
            repository.name
        );

        Ok(Self {
            remote,
            remote_url,
            current_branch,
            repository,
            history_path,
        })
    }

    /// History key for `branch` in the current repository
    #[must_use]
    pub fn starter_option_key(&self, branch: &str) -> String {
        self.repository.starter_option_key(branch)
    }

    /// Open the history storage, creating its directory if needed
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or the storage cannot be opened
    pub fn open_history(&self) -> Result<HistoryStorage> {
        if let Some(dir) = self.history_path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;
        }

        Ok(HistoryStorage::open(&self.history_path)?)
    }
}
