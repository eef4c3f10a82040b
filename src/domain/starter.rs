//! Starter options and the editable starter template
//!
//! A starter option is what `git-start` remembers about a branch it created:
//! the branch name, the pull request title chosen in the editor, and the branch
//! it was forked from.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::TemplateError;
use crate::integrations::gh::IssueInfo;

const TITLE_PREFIX: &str = "title:";
const BRANCH_PREFIX: &str = "branch:";

/// Options recorded when a branch is started from an issue
///
/// Field names on disk are fixed (`switchBranch`, `pullRequestTitle`,
/// `baseBranch`) so existing storage files keep loading. Missing or `null`
/// fields load as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarterOption {
    /// Branch to create and switch to
    #[serde(default, deserialize_with = "null_as_empty")]
    pub switch_branch: String,
    /// Title used when the pull request is opened
    #[serde(default, deserialize_with = "null_as_empty")]
    pub pull_request_title: String,
    /// Branch that was checked out when the branch was started
    #[serde(default, deserialize_with = "null_as_empty")]
    pub base_branch: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl StarterOption {
    /// Extract a starter option from edited template text
    ///
    /// The first `branch:` line and the first `title:` line win; later
    /// duplicates are ignored. Everything else, including the `---` separator
    /// and the issue body below it, is inert. `base_branch` is left empty for
    /// the caller to fill in.
    ///
    /// # Errors
    /// - [`TemplateError::MissingBranch`] if no `branch:` line has a value
    /// - [`TemplateError::InvalidBranchName`] if the branch is not ASCII
    pub fn from_template(template: &str) -> Result<Self, TemplateError> {
        let mut title: Option<&str> = None;
        let mut branch: Option<&str> = None;

        for line in template.lines() {
            let text = line.trim();

            if title.is_none() {
                if let Some(rest) = text.strip_prefix(TITLE_PREFIX) {
                    title = Some(rest.trim());
                }
            }

            if branch.is_none() {
                if let Some(rest) = text.strip_prefix(BRANCH_PREFIX) {
                    branch = Some(rest.trim());
                }
            }
        }

        let branch = match branch {
            Some(b) if !b.is_empty() => b,
            _ => return Err(TemplateError::MissingBranch),
        };

        if !branch.is_ascii() {
            return Err(TemplateError::InvalidBranchName(branch.to_string()));
        }

        Ok(Self {
            switch_branch: branch.to_string(),
            pull_request_title: title.unwrap_or_default().to_string(),
            base_branch: String::new(),
        })
    }
}

/// Render the initial template shown in the editor for an issue
#[must_use]
pub fn render_template(issue: &IssueInfo) -> String {
    format!(
        "{BRANCH_PREFIX} {number}_
{TITLE_PREFIX} {title}

// Edit branch name to checkout. title will be used for PR title.
// Original issue URL is {url}

---

{body}
",
        number = issue.number,
        title = issue.title,
        url = issue.url,
        body = issue.body,
    )
}
