//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::PathBuf;

use crate::cli::args::{CheckArgs, Cli, Commands};
use crate::error::Result;
use crate::registry::ProviderRegistry;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    registry: ProviderRegistry,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root and registry.
    pub fn new(project_root: PathBuf, registry: ProviderRegistry) -> Self {
        Self {
            project_root,
            config_path: None,
            registry,
        }
    }

    /// Use an explicit config file instead of discovery.
    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    /// Dispatch and execute a command.
    ///
    /// With no subcommand, `check` runs with default arguments.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Check(args)) => self.check(args.clone()).execute(ui),
            Some(Commands::Providers(args)) => {
                let cmd = super::providers::ProvidersCommand::new(&self.registry, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::StatusLabel(args)) => {
                let cmd = super::label::StatusLabelCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => self.check(CheckArgs::default()).execute(ui),
        }
    }

    fn check(&self, args: CheckArgs) -> super::check::CheckCommand<'_> {
        super::check::CheckCommand::new(
            &self.project_root,
            self.config_path.clone(),
            &self.registry,
            args,
        )
    }
}
