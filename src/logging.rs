//! Logger setup
//!
//! Logs go to stderr through `env_logger`. `RUST_LOG` takes precedence over
//! the `--debug` flag and the `GIT_START_DEBUG` environment variable.

use env_logger::Env;

/// Environment variable that enables debug logs like `--debug`
pub const DEBUG_ENV: &str = "GIT_START_DEBUG";

/// Default filter when `RUST_LOG` is not set
#[must_use]
pub fn default_filter(debug_flag: bool) -> &'static str {
    let debug_env = std::env::var_os(DEBUG_ENV).is_some_and(|v| !v.is_empty() && v != "0");
    if debug_flag || debug_env {
        "debug"
    } else {
        "warn"
    }
}

/// Install the global logger
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(debug_flag: bool) {
    let env = Env::default().default_filter_or(default_filter(debug_flag));
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
