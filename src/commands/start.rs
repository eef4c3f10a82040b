//! Start command - Create a branch for an issue and remember its PR settings

use anyhow::Result;

use crate::color;
use crate::commands::common::load_context;
use crate::integrations::browser::RealBrowserOpener;
use crate::integrations::editor::RealEditor;
use crate::integrations::gh::{GhClient, RealGhClient};
use crate::integrations::git::RealGitClient;
use crate::service::StarterService;

/// Start working on an issue
///
/// # Errors
/// Returns an error if:
/// - The current directory is not a checkout of a GitHub repository
/// - gh is not installed or the issue cannot be fetched
/// - The edited template is invalid
/// - The branch cannot be created or the history cannot be saved
pub fn cmd_start(issue: &str, color_mode: color::ColorMode) -> Result<()> {
    let (config, ctx) = load_context()?;

    let gh_client = RealGhClient;
    if !gh_client.is_available() {
        anyhow::bail!("gh command not found. Please install GitHub CLI: https://cli.github.com/");
    }

    let editor = RealEditor::resolve(config.editor.command.as_deref());
    let service = StarterService::new(
        RealGitClient,
        gh_client,
        editor,
        RealBrowserOpener::new(config.browser.command.as_deref()),
    );

    eprintln!(
        "{}",
        color::info(color_mode, format!("Fetching issue {issue}..."))
    );

    let option = service.start(&ctx, issue)?;

    eprintln!(
        "{}",
        color::success(
            color_mode,
            format!(
                "Switched to a new branch {} (base: {})",
                color::branch(color_mode, &option.switch_branch),
                option.base_branch
            )
        )
    );
    if !option.pull_request_title.is_empty() {
        eprintln!(
            "  {}",
            color::dim(
                color_mode,
                format!("Pull request title: {}", option.pull_request_title)
            )
        );
    }

    Ok(())
}
