// Command handlers module
// Each handler wires the real git/gh/editor/browser clients into the starter service

pub mod common;
pub mod completion;
pub mod init;
pub mod pr;
pub mod start;
