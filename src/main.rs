//! Vendorsync - FRC Vendor Dependency Sync
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use std::path::Path;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use vendorsync::cli::{Cli, Commands, ProjectContext};
use vendorsync::config::ConfigManager;
use vendorsync::error::VendorSyncResult;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> VendorSyncResult<()> {
    let cli = Cli::parse();

    // Initialize logging: 0 = warn, 1 = info, 2+ = debug
    let filter = match cli.verbose {
        0 => EnvFilter::new("vendorsync=warn"),
        1 => EnvFilter::new("vendorsync=info"),
        _ => EnvFilter::new("vendorsync=debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    // Init command doesn't need config loading
    if let Commands::Init(args) = cli.command {
        return vendorsync::cli::commands::init(args);
    }

    // Load configuration
    let config_manager = if let Some(ref path) = cli.config {
        ConfigManager::with_path(path.clone())
    } else {
        ConfigManager::new()
    };

    // Find local config unless --no-local is set
    let cwd = std::env::current_dir()
        .map_err(|e| vendorsync::error::VendorSyncError::io("getting current directory", e))?;
    let local_config_path = if cli.no_local {
        debug!("Local config discovery disabled (--no-local)");
        None
    } else {
        let found = ConfigManager::find_local_config(&cwd);
        if let Some(ref path) = found {
            debug!("Found local config: {}", path.display());
        }
        found
    };

    let mut config = config_manager.load_merged(local_config_path.as_deref())?;
    if cli.offline {
        config.network.offline = true;
    }

    // The local config file anchors the project root
    let root = local_config_path
        .as_deref()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .unwrap_or(cwd);

    let ctx = ProjectContext {
        config,
        root,
        global_config_path: config_manager.path().to_path_buf(),
        local_config_path,
    };

    // Dispatch to command
    match cli.command {
        Commands::Init(_) => unreachable!("Init handled above"),
        Commands::Check(args) => vendorsync::cli::commands::check(args, &ctx),
        Commands::Update(args) => vendorsync::cli::commands::update(args, &ctx),
        Commands::List(args) => vendorsync::cli::commands::list(args, &ctx),
        Commands::Status => vendorsync::cli::commands::status(&ctx),
    }
}
