#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use std::process::Command;

use crate::error::WorkflowError;

/// Environment variables checked for a GitHub token, in order
pub const TOKEN_ENV_VARS: [&str; 2] = ["GITHUB_TOKEN", "GIT_START_GITHUB_TOKEN"];

/// Token file in the home directory, read when no token variable is set
pub const TOKEN_FILE_NAME: &str = ".git-start-token";

/// Information about a GitHub issue
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IssueInfo {
    pub number: u32,
    pub title: String,
    /// Issue description; `gh` returns an empty string when there is none
    #[serde(default)]
    pub body: String,
    pub url: String,
}

/// Trait for interacting with GitHub CLI
pub trait GhClient {
    /// Get information about an issue in `owner/repo`
    fn issue_info(&self, owner: &str, repo: &str, number: u32) -> Result<IssueInfo>;

    /// Check if gh CLI is available
    fn is_available(&self) -> bool;
}

/// Real implementation of `GhClient` using `gh` CLI
pub struct RealGhClient;

impl GhClient for RealGhClient {
    fn issue_info(&self, owner: &str, repo: &str, number: u32) -> Result<IssueInfo> {
        log::debug!("fetching issue {owner}/{repo}#{number} with gh");

        let output = gh_command()
            .args([
                "issue",
                "view",
                &number.to_string(),
                "--repo",
                &format!("{owner}/{repo}"),
                "--json",
                "number,title,body,url",
            ])
            .output()
            .context("Failed to execute gh command")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            if is_not_found(&stderr) {
                return Err(WorkflowError::IssueNotFound {
                    owner: owner.to_string(),
                    repo: repo.to_string(),
                    number,
                }
                .into());
            }
            anyhow::bail!("gh issue view failed: {stderr}");
        }

        let json = String::from_utf8_lossy(&output.stdout);
        serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse issue info JSON: {json}"))
    }

    fn is_available(&self) -> bool {
        Command::new("gh")
            .arg("--version")
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false)
    }
}

/// Whether gh's error output means the issue does not exist
fn is_not_found(stderr: &str) -> bool {
    let stderr = stderr.to_ascii_lowercase();
    stderr.contains("could not resolve to an issue") || stderr.contains("http 404")
}

/// GitHub token from `GITHUB_TOKEN`, `GIT_START_GITHUB_TOKEN` or `~/.git-start-token`
///
/// Returns `None` when none is set, leaving authentication to gh's own login.
pub fn resolve_token() -> Option<String> {
    TOKEN_ENV_VARS
        .iter()
        .find_map(|name| std::env::var(name).ok().filter(|t| !t.trim().is_empty()))
        .or_else(|| dirs::home_dir().and_then(|home| read_token_file(&home.join(TOKEN_FILE_NAME))))
}

fn read_token_file(path: &Path) -> Option<String> {
    let token = std::fs::read_to_string(path).ok()?;
    let token = token.trim();
    (!token.is_empty()).then(|| token.to_string())
}

/// `gh` command carrying the resolved token as `GH_TOKEN`
pub fn gh_command() -> Command {
    let mut cmd = Command::new("gh");
    if let Some(token) = resolve_token() {
        log::debug!("passing GitHub token to gh via GH_TOKEN");
        cmd.env("GH_TOKEN", token);
    }
    cmd
}
