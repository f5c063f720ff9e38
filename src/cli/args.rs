//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// cloudstatus - Validate status provider configuration.
#[derive(Debug, Parser)]
#[command(name = "cloudstatus")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .cloudstatus/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate the status config and report provider readiness (default)
    Check(CheckArgs),

    /// List supported cloud providers and their prerequisites
    Providers(ProvidersArgs),

    /// Print the label for a status key
    StatusLabel(StatusLabelArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `providers` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ProvidersArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `status-label` command.
#[derive(Debug, Clone, clap::Args)]
pub struct StatusLabelArgs {
    /// Status key (RUNNING, COMPLETE, ERROR)
    pub key: String,
}
