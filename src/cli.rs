// CommandFactory is used by tests via Cli::command()
#[allow(unused_imports)]
use clap::CommandFactory;

use clap::{Parser, Subcommand};
use clap_complete::engine::{ArgValueCompleter, CompletionCandidate};
use serde::Deserialize;
use std::ffi::OsStr;

use crate::integrations::gh::gh_command;

/// Start working on a GitHub issue: create a branch, then open its pull request
#[derive(Parser, Debug)]
#[command(
    name = "git-start",
    author,
    version,
    about,
    long_about = None,
    args_conflicts_with_subcommands = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Issue number (1234, #1234) or issue URL to start working on
    #[arg(value_name = "ISSUE", add = ArgValueCompleter::new(list_open_issues))]
    pub issue: Option<String>,

    /// When to use colored output
    #[arg(long, value_name = "WHEN", global = true, ignore_case = true)]
    pub color: Option<crate::color::ColorMode>,

    /// Print debug logs to stderr
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Push the current branch and open its pull request page
    #[command(visible_alias = "pull-request")]
    Pr,
    /// Write the global configuration template
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },
    /// Print shell completion setup instructions
    Completion {
        /// Shell type (bash, zsh, fish)
        shell: String,
    },
}

#[derive(Debug, Deserialize)]
struct OpenIssue {
    number: u32,
    title: String,
}

/// List open issues of the current repository for completion
///
/// Returns empty Vec if gh is missing or fails (e.g., outside a repository)
#[must_use]
pub fn list_open_issues(current: &OsStr) -> Vec<CompletionCandidate> {
    let output = gh_command()
        .args([
            "issue",
            "list",
            "--state",
            "open",
            "--limit",
            "100",
            "--json",
            "number,title",
        ])
        .output();

    let Ok(output) = output else {
        return Vec::new();
    };

    if !output.status.success() {
        return Vec::new();
    }

    parse_issue_candidates(&String::from_utf8_lossy(&output.stdout), &current.to_string_lossy())
        .into_iter()
        .map(|(number, title)| CompletionCandidate::new(number).help(Some(title.into())))
        .collect()
}

/// Parse `gh issue list --json number,title` output into (number, title) pairs
/// whose number starts with `prefix`
#[must_use]
pub fn parse_issue_candidates(json: &str, prefix: &str) -> Vec<(String, String)> {
    let Ok(issues) = serde_json::from_str::<Vec<OpenIssue>>(json) else {
        return Vec::new();
    };

    let prefix = prefix.strip_prefix('#').unwrap_or(prefix);

    issues
        .into_iter()
        .map(|issue| (issue.number.to_string(), issue.title))
        .filter(|(number, _)| number.starts_with(prefix))
        .collect()
}
