//! Typed errors for the template parser, history store and workflow
//!
//! Command handlers work with `anyhow::Result`; these types travel through it
//! unchanged so callers (and tests) can `downcast_ref` them.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while extracting a starter option from an edited template
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("branch is not specified")]
    MissingBranch,

    #[error("invalid branch name: {0}. only ascii code is allowed")]
    InvalidBranchName(String),
}

/// Errors raised by the history store
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to access history storage {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode history storage: {0}")]
    Encode(#[from] serde_json::Error),
}

impl StorageError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors surfaced by the start / pr workflow
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorkflowError {
    #[error("issue #{number} is not found in {owner}/{repo}")]
    IssueNotFound {
        owner: String,
        repo: String,
        number: u32,
    },

    #[error(
        "git-start history not found for branch '{branch}'. did you run git-start on this branch?"
    )]
    HistoryNotFound { branch: String },
}
