//! Configuration module
//!
//! This module handles loading git-start configuration from a TOML file.

pub mod loader;
pub mod schema;

pub use schema::{BrowserConfig, Config, EditorConfig, GitConfig, StorageConfig};
