//! Command implementations.
//!
//! Each command writes its user-facing output to the given writer and
//! reports everything else through `tracing`.

pub mod catalog;
pub mod edit;
pub mod shell;

/// Result type shared by all commands.
pub type CommandResult = Result<(), Box<dyn std::error::Error>>;
