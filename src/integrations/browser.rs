#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
use anyhow::{Context, Result};
use std::process::Command;

use super::editor::split_command;

/// Browser interface for opening URLs
pub trait BrowserOpener {
    fn open(&self, url: &str) -> Result<()>;
}

/// Opens URLs with a configured command or the platform opener
#[derive(Debug, Clone, Default)]
pub struct RealBrowserOpener {
    command: Option<String>,
}

impl RealBrowserOpener {
    pub fn new(command: Option<&str>) -> Self {
        Self {
            command: command
                .filter(|c| !c.trim().is_empty())
                .map(String::from),
        }
    }

    /// Program and leading arguments used to open a URL
    fn opener(&self) -> Result<(&str, Vec<&str>)> {
        match &self.command {
            Some(command) => split_command(command),
            None => Ok(platform_opener()),
        }
    }
}

impl BrowserOpener for RealBrowserOpener {
    fn open(&self, url: &str) -> Result<()> {
        let (program, args) = self.opener()?;
        log::debug!("opening {url} with {program}");

        let status = Command::new(program)
            .args(args)
            .arg(url)
            .status()
            .with_context(|| format!("Failed to execute {program}"))?;

        if !status.success() {
            anyhow::bail!("{program} exited with {status}");
        }

        Ok(())
    }
}

fn platform_opener() -> (&'static str, Vec<&'static str>) {
    if cfg!(target_os = "macos") {
        ("open", Vec::new())
    } else if cfg!(target_os = "windows") {
        ("cmd", vec!["/C", "start", ""])
    } else {
        ("xdg-open", Vec::new())
    }
}
