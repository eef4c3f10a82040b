//! Terminal colors for status messages
//!
//! Status messages go to stderr. stdout only carries machine-readable output
//! (the pull request URL, completion scripts) and is never colored.

use std::env;
use std::fmt;
use std::str::FromStr;

use owo_colors::OwoColorize;

/// Color mode for terminal output
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Default)]
pub enum ColorMode {
    /// Always use colors
    Always,
    /// Automatically detect whether to use colors
    #[default]
    Auto,
    /// Never use colors
    Never,
}

impl FromStr for ColorMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "always" => Ok(Self::Always),
            "auto" => Ok(Self::Auto),
            "never" => Ok(Self::Never),
            _ => anyhow::bail!("Invalid color mode: {s}. Expected one of: always, auto, never"),
        }
    }
}

impl ColorMode {
    /// Resolve color mode from CLI flag and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. CLI flag (`--color=always|auto|never`)
    /// 2. `NO_COLOR` environment variable
    /// 3. `TERM=dumb` environment variable
    /// 4. Default (Auto)
    #[must_use]
    pub fn resolve(cli_mode: Option<Self>) -> Self {
        if let Some(mode) = cli_mode {
            return mode;
        }

        if env::var_os("NO_COLOR").is_some() {
            return Self::Never;
        }

        if env::var("TERM").is_ok_and(|term| term == "dumb") {
            return Self::Never;
        }

        Self::Auto
    }

    /// Check if colors should be enabled for stderr
    #[must_use]
    pub fn should_colorize(self) -> bool {
        match self {
            Self::Always => true,
            Self::Auto => supports_color::on_cached(supports_color::Stream::Stderr).is_some(),
            Self::Never => false,
        }
    }
}

/// Message style for different types of output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    /// Success message (green ✓)
    Success,
    /// Info/progress message (cyan ℹ)
    Info,
    /// Warning message (yellow ⚠)
    Warn,
    /// Error message (red ✗)
    Error,
}

impl MessageStyle {
    const fn symbol(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Info => "ℹ",
            Self::Warn => "⚠",
            Self::Error => "✗",
        }
    }

    /// Format a message with this style
    #[allow(clippy::missing_const_for_fn)]
    pub fn format<D: fmt::Display>(self, mode: ColorMode, message: D) -> FormattedMessage<D> {
        FormattedMessage {
            style: self,
            mode,
            message,
        }
    }
}

/// A formatted message with color and symbol
pub struct FormattedMessage<D> {
    style: MessageStyle,
    mode: ColorMode,
    message: D,
}

impl<D: fmt::Display> fmt::Display for FormattedMessage<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = self.style.symbol();
        if !self.mode.should_colorize() {
            return write!(f, "{symbol} {}", self.message);
        }

        match self.style {
            MessageStyle::Success => write!(f, "{} {}", symbol.bright_green().bold(), self.message),
            MessageStyle::Info => write!(f, "{} {}", symbol.bright_cyan(), self.message),
            MessageStyle::Warn => write!(f, "{} {}", symbol.bright_yellow(), self.message),
            MessageStyle::Error => write!(f, "{} {}", symbol.bright_red().bold(), self.message),
        }
    }
}

/// Format a success message (green ✓)
pub fn success<D: fmt::Display>(mode: ColorMode, message: D) -> FormattedMessage<D> {
    MessageStyle::Success.format(mode, message)
}

/// Format an info/progress message (cyan ℹ)
pub fn info<D: fmt::Display>(mode: ColorMode, message: D) -> FormattedMessage<D> {
    MessageStyle::Info.format(mode, message)
}

/// Format a warning message (yellow ⚠)
pub fn warn<D: fmt::Display>(mode: ColorMode, message: D) -> FormattedMessage<D> {
    MessageStyle::Warn.format(mode, message)
}

/// Format an error message (red ✗)
pub fn error<D: fmt::Display>(mode: ColorMode, message: D) -> FormattedMessage<D> {
    MessageStyle::Error.format(mode, message)
}

/// Text rendered in a single accent style
pub struct StyledText<D> {
    mode: ColorMode,
    text: D,
    accent: Accent,
}

#[derive(Debug, Clone, Copy)]
enum Accent {
    Branch,
    Dim,
}

impl<D: fmt::Display> fmt::Display for StyledText<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.mode.should_colorize() {
            return write!(f, "{}", self.text);
        }

        let text = self.text.to_string();
        match self.accent {
            Accent::Branch => write!(f, "{}", text.cyan()),
            Accent::Dim => write!(f, "{}", text.dimmed()),
        }
    }
}

/// Branch names in cyan
#[allow(clippy::missing_const_for_fn)]
pub fn branch<D: fmt::Display>(mode: ColorMode, text: D) -> StyledText<D> {
    StyledText {
        mode,
        text,
        accent: Accent::Branch,
    }
}

/// Dim text for secondary information (paths, URLs)
#[allow(clippy::missing_const_for_fn)]
pub fn dim<D: fmt::Display>(mode: ColorMode, text: D) -> StyledText<D> {
    StyledText {
        mode,
        text,
        accent: Accent::Dim,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_from_cli() {
        for mode in [ColorMode::Always, ColorMode::Auto, ColorMode::Never] {
            assert_eq!(ColorMode::resolve(Some(mode)), mode);
        }
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!("ALWAYS".parse::<ColorMode>().unwrap(), ColorMode::Always);
        assert_eq!("Auto".parse::<ColorMode>().unwrap(), ColorMode::Auto);
        assert_eq!("NeVeR".parse::<ColorMode>().unwrap(), ColorMode::Never);
    }

    #[test]
    fn test_from_str_invalid() {
        let err = "sometimes".parse::<ColorMode>().unwrap_err();
        assert!(err.to_string().contains("Invalid color mode"));
    }

    #[test]
    #[serial_test::serial]
    fn test_resolve_no_color_env() {
        temp_env::with_var("NO_COLOR", Some("1"), || {
            assert_eq!(ColorMode::resolve(None), ColorMode::Never);
        });
    }

    #[test]
    #[serial_test::serial]
    fn test_resolve_term_dumb() {
        temp_env::with_vars([("TERM", Some("dumb")), ("NO_COLOR", None::<&str>)], || {
            assert_eq!(ColorMode::resolve(None), ColorMode::Never);
        });
    }

    #[test]
    #[serial_test::serial]
    fn test_resolve_cli_overrides_no_color() {
        temp_env::with_var("NO_COLOR", Some("1"), || {
            assert_eq!(ColorMode::resolve(Some(ColorMode::Always)), ColorMode::Always);
        });
    }

    #[test]
    #[serial_test::serial]
    fn test_resolve_default_auto() {
        temp_env::with_vars([("NO_COLOR", None::<&str>), ("TERM", None::<&str>)], || {
            assert_eq!(ColorMode::resolve(None), ColorMode::Auto);
        });
    }

    #[test]
    fn test_should_colorize_fixed_modes() {
        assert!(ColorMode::Always.should_colorize());
        assert!(!ColorMode::Never.should_colorize());
    }

    #[test]
    fn test_messages_never() {
        assert_eq!(
            success(ColorMode::Never, "Switched to feature-1").to_string(),
            "✓ Switched to feature-1"
        );
        assert_eq!(info(ColorMode::Never, "Fetching").to_string(), "ℹ Fetching");
        assert_eq!(warn(ColorMode::Never, "careful").to_string(), "⚠ careful");
        assert_eq!(error(ColorMode::Never, "failed").to_string(), "✗ failed");
    }

    #[test]
    fn test_success_message_always() {
        let output = success(ColorMode::Always, "done").to_string();
        assert!(output.contains('\x1b'));
        assert!(output.contains("done"));
    }

    #[test]
    fn test_styled_text() {
        assert_eq!(branch(ColorMode::Never, "feature-1").to_string(), "feature-1");
        assert_eq!(dim(ColorMode::Never, "~/x").to_string(), "~/x");

        let colored = branch(ColorMode::Always, "feature-1").to_string();
        assert!(colored.contains('\x1b'));
        assert!(colored.contains("feature-1"));
        assert!(dim(ColorMode::Always, "~/x").to_string().contains('\x1b'));
    }
}
