#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
use anyhow::{Context, Result};
use std::io::Write;
use std::process::Command;

const DEFAULT_EDITOR: &str = "vim";

/// Editor interface: let the user edit some text and return the result
pub trait Editor {
    fn capture(&self, initial: &str) -> Result<String>;
}

/// Editor backed by a temporary file and an external editor command
#[derive(Debug, Clone)]
pub struct RealEditor {
    command: String,
}

impl RealEditor {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// Resolve the editor command
    ///
    /// Priority: configured command, then `$EDITOR`, then `vim`.
    pub fn resolve(configured: Option<&str>) -> Self {
        let command = configured
            .map(String::from)
            .filter(|c| !c.trim().is_empty())
            .or_else(|| std::env::var("EDITOR").ok().filter(|c| !c.trim().is_empty()))
            .unwrap_or_else(|| DEFAULT_EDITOR.to_string());
        Self::new(command)
    }

    pub fn command(&self) -> &str {
        &self.command
    }
}

impl Editor for RealEditor {
    fn capture(&self, initial: &str) -> Result<String> {
        let (program, args) = split_command(&self.command)?;

        // Removed when dropped, including on early return
        let mut file = tempfile::Builder::new()
            .prefix("git-start-")
            .suffix(".md")
            .tempfile()
            .context("Failed to create temporary file for editor")?;
        file.write_all(initial.as_bytes())
            .context("Failed to write template to temporary file")?;
        file.flush()?;

        log::debug!("opening {} with {}", file.path().display(), self.command);

        let status = Command::new(program)
            .args(args)
            .arg(file.path())
            .status()
            .with_context(|| format!("Failed to launch editor: {}", self.command))?;

        if !status.success() {
            anyhow::bail!("editor exited with {status}");
        }

        std::fs::read_to_string(file.path()).context("Failed to read edited template")
    }
}

/// Split a command line into program and arguments on whitespace
pub fn split_command(command: &str) -> Result<(&str, Vec<&str>)> {
    let mut parts = command.split_whitespace();
    let Some(program) = parts.next() else {
        anyhow::bail!("command is empty");
    };
    Ok((program, parts.collect()))
}

#[cfg(test)]
pub mod tests {
    use super::*;

    /// Mock editor that replaces the template with fixed text, or returns it untouched
    pub struct MockEditor {
        pub replacement: Option<String>,
        pub should_fail: bool,
    }

    impl MockEditor {
        pub fn untouched() -> Self {
            Self {
                replacement: None,
                should_fail: false,
            }
        }

        pub fn replacing_with(text: &str) -> Self {
            Self {
                replacement: Some(text.to_string()),
                should_fail: false,
            }
        }

        pub fn failing() -> Self {
            Self {
                replacement: None,
                should_fail: true,
            }
        }
    }

    impl Editor for MockEditor {
        fn capture(&self, initial: &str) -> Result<String> {
            if self.should_fail {
                anyhow::bail!("Mock editor failure");
            }
            Ok(self
                .replacement
                .clone()
                .unwrap_or_else(|| initial.to_string()))
        }
    }

    #[test]
    fn test_split_command_with_args() {
        let (program, args) = split_command("code --wait").unwrap();
        assert_eq!(program, "code");
        assert_eq!(args, vec!["--wait"]);
    }

    #[test]
    fn test_split_command_empty() {
        assert!(split_command("   ").is_err());
    }

    #[test]
    #[serial_test::serial]
    fn test_resolve_prefers_configured() {
        temp_env::with_var("EDITOR", Some("nano"), || {
            assert_eq!(RealEditor::resolve(Some("hx")).command(), "hx");
        });
    }

    #[test]
    #[serial_test::serial]
    fn test_resolve_uses_editor_env() {
        temp_env::with_var("EDITOR", Some("nano"), || {
            assert_eq!(RealEditor::resolve(None).command(), "nano");
        });
    }

    #[test]
    #[serial_test::serial]
    fn test_resolve_defaults_to_vim() {
        temp_env::with_var("EDITOR", None::<&str>, || {
            assert_eq!(RealEditor::resolve(None).command(), "vim");
        });
    }

    #[cfg(unix)]
    #[test]
    fn test_capture_returns_file_content_after_editor() {
        // `true` leaves the file as written
        let editor = RealEditor::new("true");
        let captured = editor.capture("branch: feature-1\n").unwrap();
        assert_eq!(captured, "branch: feature-1\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_capture_fails_when_editor_fails() {
        let editor = RealEditor::new("false");
        assert!(editor.capture("branch: feature-1\n").is_err());
    }

    #[test]
    fn test_capture_fails_when_editor_missing() {
        let editor = RealEditor::new("git-start-no-such-editor");
        assert!(editor.capture("text").is_err());
    }
}
