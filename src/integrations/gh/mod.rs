#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
mod client;
mod input;

pub use client::{gh_command, resolve_token, GhClient, IssueInfo, RealGhClient};
pub use input::Issuable;

#[cfg(test)]
pub use client::tests::MockGhClient;

use anyhow::Result;

use crate::domain::repository::Repository;
use crate::domain::starter::StarterOption;

/// Build the GitHub "compare" URL that opens the pull request form
///
/// Format: `https://github.com/{owner}/{repo}/compare/{base}...{head}?quick_pull=1&title={title}`
pub fn build_pull_request_url(
    repository: &Repository,
    option: &StarterOption,
    head_branch: &str,
) -> Result<String> {
    let query = serde_urlencoded::to_string([
        ("quick_pull", "1"),
        ("title", option.pull_request_title.as_str()),
    ])?;

    Ok(format!(
        "https://github.com/{}/{}/compare/{}...{}?{query}",
        repository.owner, repository.name, option.base_branch, head_branch,
    ))
}
