//! Completion command - Print shell completion setup instructions

use anyhow::Result;
use clap_complete::Shell;

/// Print the snippet that enables dynamic completion for `shell`
///
/// # Errors
/// Returns an error if the shell is not one of bash, zsh or fish
pub fn cmd_completion(shell: &str) -> Result<()> {
    print!("{}", completion_snippet(shell)?);
    Ok(())
}

fn completion_snippet(shell: &str) -> Result<&'static str> {
    let parsed = shell.parse::<Shell>().map_err(|_| {
        anyhow::anyhow!("Invalid shell: {shell}. Supported shells: bash, zsh, fish")
    })?;

    let snippet = match parsed {
        Shell::Bash => {
            r"# git-start shell completion setup for Bash
# Add this to your ~/.bashrc:
source <(COMPLETE=bash git-start)
"
        }
        Shell::Zsh => {
            r"# git-start shell completion setup for Zsh
# Add this to your ~/.zshrc:
source <(COMPLETE=zsh git-start)
"
        }
        Shell::Fish => {
            r"# git-start shell completion setup for Fish
# Add this to your ~/.config/fish/config.fish:
source (COMPLETE=fish git-start | psub)
"
        }
        _ => anyhow::bail!("Unsupported shell: {shell}"),
    };

    Ok(snippet)
}
