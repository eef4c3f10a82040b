// Domain module
// Starter options, history keys and repository identity

pub mod key;
pub mod repository;
pub mod starter;
