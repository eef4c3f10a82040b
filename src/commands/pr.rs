//! Pull request command - Push the current branch and open the PR form

use anyhow::Result;

use crate::color;
use crate::commands::common::load_context;
use crate::integrations::browser::RealBrowserOpener;
use crate::integrations::editor::RealEditor;
use crate::integrations::gh::RealGhClient;
use crate::integrations::git::RealGitClient;
use crate::service::StarterService;

/// Push the current branch and open its pull request page
///
/// The URL is printed to stdout once the page has been opened.
///
/// # Errors
/// Returns an error if:
/// - The current branch was not created by git-start
/// - The push fails
/// - The browser command fails
pub fn cmd_pr(color_mode: color::ColorMode) -> Result<()> {
    let (config, ctx) = load_context()?;

    let service = StarterService::new(
        RealGitClient,
        RealGhClient,
        RealEditor::resolve(config.editor.command.as_deref()),
        RealBrowserOpener::new(config.browser.command.as_deref()),
    );

    eprintln!(
        "{}",
        color::info(
            color_mode,
            format!(
                "Pushing {} to {}...",
                color::branch(color_mode, &ctx.current_branch),
                ctx.remote
            )
        )
    );

    let url = service.pull_request(&ctx)?;
    println!("{url}");

    eprintln!(
        "{}",
        color::success(color_mode, "Opened pull request page")
    );

    Ok(())
}
