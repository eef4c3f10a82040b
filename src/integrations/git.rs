#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
use anyhow::{Context, Result};
use std::process::{Command, Output};

/// Git client interface for the start / pr workflow
pub trait GitClient {
    /// Names of configured remotes, in `git remote` order
    fn remotes(&self) -> Result<Vec<String>>;

    /// Fetch URL of a remote
    fn remote_url(&self, name: &str) -> Result<String>;

    /// Name of the checked out branch
    ///
    /// Fails on a detached HEAD.
    fn current_branch(&self) -> Result<String>;

    /// Create a branch from HEAD and switch to it (`git switch -c`)
    fn switch_create(&self, branch: &str) -> Result<()>;

    /// Push a branch and set its upstream (`git push -u`)
    fn push_upstream(&self, remote: &str, branch: &str) -> Result<()>;
}

/// Real git implementation
#[derive(Debug, Default)]
pub struct RealGitClient;

impl RealGitClient {
    fn run(args: &[&str]) -> Result<Output> {
        log::debug!("running git {}", args.join(" "));

        let output = Command::new("git")
            .args(args)
            .output()
            .with_context(|| format!("Failed to execute git {}", args[0]))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("git {} failed: {}", args[0], stderr.trim());
        }

        Ok(output)
    }
}

impl GitClient for RealGitClient {
    fn remotes(&self) -> Result<Vec<String>> {
        let output = Self::run(&["remote"])?;
        Ok(parse_remote_list(&String::from_utf8_lossy(&output.stdout)))
    }

    fn remote_url(&self, name: &str) -> Result<String> {
        let output = Self::run(&["remote", "get-url", name])?;
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn current_branch(&self) -> Result<String> {
        let output = Self::run(&["branch", "--show-current"])?;
        let branch = String::from_utf8_lossy(&output.stdout).trim().to_string();

        if branch.is_empty() {
            anyhow::bail!("HEAD is detached. Please check out a branch first.");
        }

        Ok(branch)
    }

    fn switch_create(&self, branch: &str) -> Result<()> {
        let output = Self::run(&["switch", "-c", branch])?;
        log::debug!("{}", String::from_utf8_lossy(&output.stderr).trim());
        Ok(())
    }

    fn push_upstream(&self, remote: &str, branch: &str) -> Result<()> {
        let output = Self::run(&["push", "-u", remote, branch])?;
        log::debug!("{}", String::from_utf8_lossy(&output.stderr).trim());
        Ok(())
    }
}

/// Parse `git remote` output into remote names
pub fn parse_remote_list(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Pick the remote used for repository identity and pushing
///
/// Priority: configured remote, then `origin`, then the first listed remote.
pub fn select_remote(remotes: &[String], configured: Option<&str>) -> Result<String> {
    if remotes.is_empty() {
        anyhow::bail!("no remotes found");
    }

    if let Some(name) = configured {
        if remotes.iter().any(|r| r == name) {
            return Ok(name.to_string());
        }
        anyhow::bail!("configured remote '{name}' does not exist");
    }

    if remotes.iter().any(|r| r == "origin") {
        return Ok("origin".to_string());
    }

    Ok(remotes[0].clone())
}
