//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Vendorsync - keep FRC vendor dependency JSON files in sync
///
/// Checks remote vendordep descriptors for updates, refreshes a local
/// cache, and copies current descriptors into the project.
#[derive(Parser, Debug)]
#[command(name = "vendorsync")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Global configuration file path
    #[arg(short, long, global = true, env = "VENDORSYNC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress all network calls, rely on local files only
    #[arg(long, global = true)]
    pub offline: bool,

    /// Skip local vendorsync.toml discovery
    #[arg(long, global = true)]
    pub no_local: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check the vendor dependency files for available updates
    Check(CheckArgs),

    /// Update the vendor dependency files and sync them into the project
    Update(UpdateArgs),

    /// List configured vendor dependencies and their local state
    List(ListArgs),

    /// Check configuration and remote reachability
    Status,

    /// Initialize a project-local vendorsync.toml
    Init(InitArgs),
}

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Only check the named dependencies (default: all)
    pub names: Vec<String>,
}

/// Arguments for the update command
#[derive(Parser, Debug)]
pub struct UpdateArgs {
    /// Only update the named dependencies (default: all)
    pub names: Vec<String>,
}

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the init command
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Overwrite existing vendorsync.toml
    #[arg(short, long)]
    pub force: bool,

    /// Target directory (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<PathBuf>,
}

/// Output format for the list command
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
    /// Simple text (one per line)
    Plain,
}
