// Export modules for testing
pub mod cli;
pub mod color;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod service;
pub mod storage;

// Integration modules
pub mod integrations;

// Command modules
pub mod commands;

// Domain modules
pub mod domain;
