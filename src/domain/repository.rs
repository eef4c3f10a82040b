//! Repository identity derived from a git remote URL

use anyhow::{bail, Context, Result};
use std::fmt;

use super::key::derive_key;

/// Supported hosting service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hosting {
    GitHub,
}

impl fmt::Display for Hosting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GitHub => write!(f, "GitHub"),
        }
    }
}

/// Hosting service, owner and name of the current repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub hosting: Hosting,
    pub owner: String,
    pub name: String,
}

impl Repository {
    /// Guess the repository from a remote URL
    ///
    /// Accepts `https://github.com/owner/repo.git`, `ssh://git@github.com/owner/repo.git`
    /// and scp-like `git@github.com:owner/repo.git`.
    ///
    /// # Errors
    /// Returns an error if the host is not github.com or the path is not `owner/repo`
    pub fn from_remote_url(remote_url: &str) -> Result<Self> {
        let (host, path) = split_remote_url(remote_url.trim())
            .with_context(|| format!("Failed to parse remote URL: {remote_url}"))?;

        if !host.contains("github.com") {
            bail!("only github.com is supported now (remote: {remote_url})");
        }

        let (owner, name) = extract_repository_path(path)?;

        Ok(Self {
            hosting: Hosting::GitHub,
            owner,
            name,
        })
    }

    /// History key for a branch of this repository
    #[must_use]
    pub fn starter_option_key(&self, branch: &str) -> String {
        derive_key(&self.hosting.to_string(), &self.owner, &self.name, branch)
    }
}

/// Split a remote URL into host and path
fn split_remote_url(url: &str) -> Option<(&str, &str)> {
    if let Some((_scheme, rest)) = url.split_once("://") {
        let (authority, path) = rest.split_once('/')?;
        let host = authority.rsplit_once('@').map_or(authority, |(_, h)| h);
        let host = host.split_once(':').map_or(host, |(h, _port)| h);
        return Some((host, path));
    }

    // scp-like syntax: [user@]host:path
    let (authority, path) = url.split_once(':')?;
    let host = authority.rsplit_once('@').map_or(authority, |(_, h)| h);
    Some((host, path))
}

/// "/owner/repo.git" => ("owner", "repo")
fn extract_repository_path(path: &str) -> Result<(String, String)> {
    let path = path.strip_prefix('/').unwrap_or(path);
    let path = path.strip_suffix('/').unwrap_or(path);

    let parts: Vec<&str> = path.split('/').collect();
    let [owner, repo] = parts.as_slice() else {
        bail!("fail to extract repository like string: {path}");
    };

    let repo = repo.strip_suffix(".git").unwrap_or(repo);
    if owner.is_empty() || repo.is_empty() {
        bail!("fail to extract repository like string: {path}");
    }

    Ok(((*owner).to_string(), repo.to_string()))
}
