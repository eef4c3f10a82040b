//! Init command - Write the global configuration template

use anyhow::{Context, Result};
use std::path::Path;

use crate::color;
use crate::commands::common::display_path;
use crate::config::Config;

/// Write the config file unless it exists (or `force` is set)
///
/// Returns whether the file was written.
fn write_config_if_needed(
    path: &Path,
    template: &str,
    force: bool,
    color_mode: color::ColorMode,
) -> Result<bool> {
    if path.exists() && !force {
        eprintln!(
            "{}",
            color::warn(
                color_mode,
                format!("Config already exists: {}", display_path(path))
            )
        );
        eprintln!("Use --force to overwrite");
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
    }

    std::fs::write(path, template)
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;

    eprintln!(
        "{}",
        color::success(
            color_mode,
            format!("Created config: {}", display_path(path))
        )
    );
    Ok(true)
}

/// Initialize the global configuration file
///
/// # Errors
/// Returns an error if:
/// - The config path cannot be determined
/// - File write fails
pub fn cmd_init(force: bool, color_mode: color::ColorMode) -> Result<()> {
    let Some(path) = Config::global_config_path() else {
        anyhow::bail!(
            "Could not determine global config path (HOME directory not found). \
             Please set the HOME environment variable or XDG_CONFIG_HOME."
        );
    };

    write_config_if_needed(&path, Config::template_global(), force, color_mode)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_config_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a/b/config.toml");

        let written =
            write_config_if_needed(&path, "# template\n", false, color::ColorMode::Never).unwrap();

        assert!(written);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# template\n");
    }

    #[test]
    fn test_write_config_keeps_existing_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "custom").unwrap();

        let written =
            write_config_if_needed(&path, "# template\n", false, color::ColorMode::Never).unwrap();

        assert!(!written);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "custom");
    }

    #[test]
    fn test_write_config_force_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "custom").unwrap();

        let written =
            write_config_if_needed(&path, "# template\n", true, color::ColorMode::Never).unwrap();

        assert!(written);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# template\n");
    }
}
