// External integrations module
// This module contains integrations with external tools

pub mod browser;
pub mod editor;
pub mod git;

// GitHub integration
pub mod gh;
