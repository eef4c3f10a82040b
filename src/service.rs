#![allow(clippy::missing_errors_doc)]
use anyhow::Result;

use crate::context::RepoContext;
use crate::domain::starter::{render_template, StarterOption};
use crate::error::WorkflowError;
use crate::integrations::browser::BrowserOpener;
use crate::integrations::editor::Editor;
use crate::integrations::gh::{build_pull_request_url, GhClient, Issuable};
use crate::integrations::git::GitClient;

/// Starter service that coordinates git, GitHub, the editor and the browser
pub struct StarterService<G, H, E, B>
where
    G: GitClient,
    H: GhClient,
    E: Editor,
    B: BrowserOpener,
{
    git_client: G,
    gh_client: H,
    editor: E,
    browser: B,
}

impl<G, H, E, B> StarterService<G, H, E, B>
where
    G: GitClient,
    H: GhClient,
    E: Editor,
    B: BrowserOpener,
{
    /// Create a new starter service
    pub const fn new(git_client: G, gh_client: H, editor: E, browser: B) -> Self {
        Self {
            git_client,
            gh_client,
            editor,
            browser,
        }
    }

    /// Start a branch from an issue
    ///
    /// Fetches the issue, lets the user edit the branch/title template,
    /// creates and switches to the branch, and records the starter option
    /// under the new branch's history key. The history storage is opened
    /// before the branch is created so a storage failure leaves git untouched.
    ///
    /// # Arguments
    /// * `ctx` - Current repository context
    /// * `issuable` - Issue number or URL
    ///
    /// # Returns
    /// The recorded starter option
    pub fn start(&self, ctx: &RepoContext, issuable: &str) -> Result<StarterOption> {
        let issuable = Issuable::parse(issuable)?;

        // Fall back to the current repository when only a number was given
        let owner = issuable
            .owner
            .unwrap_or_else(|| ctx.repository.owner.clone());
        let repo = issuable
            .repo
            .unwrap_or_else(|| ctx.repository.name.clone());

        let issue = self.gh_client.issue_info(&owner, &repo, issuable.number)?;

        let edited = self.editor.capture(&render_template(&issue))?;

        let mut option = StarterOption::from_template(&edited)?;
        option.base_branch.clone_from(&ctx.current_branch);

        let mut storage = ctx.open_history()?;

        self.git_client.switch_create(&option.switch_branch)?;

        let key = ctx.starter_option_key(&option.switch_branch);
        storage.set(key, option.clone())?;

        Ok(option)
    }

    /// Push the current branch and open its pull request page
    ///
    /// # Returns
    /// The pull request URL
    pub fn pull_request(&self, ctx: &RepoContext) -> Result<String> {
        let storage = ctx.open_history()?;

        let key = ctx.starter_option_key(&ctx.current_branch);
        let Some(option) = storage.get(&key) else {
            return Err(WorkflowError::HistoryNotFound {
                branch: ctx.current_branch.clone(),
            }
            .into());
        };

        self.git_client
            .push_upstream(&ctx.remote, &ctx.current_branch)?;

        let url = build_pull_request_url(&ctx.repository, option, &ctx.current_branch)?;
        self.browser.open(&url)?;

        Ok(url)
    }
}
