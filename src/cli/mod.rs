//! Command-line interface for cloudstatus.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{CheckArgs, Cli, Commands, ProvidersArgs, StatusLabelArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
