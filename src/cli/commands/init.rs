//! Init command - create a project-local vendorsync.toml

use crate::cli::args::InitArgs;
use crate::config::LOCAL_CONFIG_NAME;
use crate::error::{VendorSyncError, VendorSyncResult};
use console::{style, Emoji};
use std::fs;
use std::path::Path;

static CHECK: Emoji<'_, '_> = Emoji("✓ ", "[OK] ");

/// Template for project-local config
const INIT_TEMPLATE: &str = r#"# Vendorsync project configuration
# Settings here override your global config (~/.config/vendorsync/config.toml)
# Docs: https://github.com/rivierarobotics/vendorsync

[project]
# Directory holding the vendordep JSON files, relative to this file
# vendordep_dir = "vendordeps"

[network]
# offline = false
# http_timeout_secs = 30

# One entry per vendor dependency:
#
# [[dependency]]
# name = "Phoenix6"
# url = "https://maven.ctr-electronics.com/release/com/ctre/phoenix6/latest/Phoenix6-frc2024-latest.json"
#
# [[dependency]]
# name = "REVLib"
# url = "https://software-metadata.revrobotics.com/REVLib-2024.json"
"#;

/// Execute the init command
pub fn execute(args: InitArgs) -> VendorSyncResult<()> {
    let target_dir = match args.path {
        Some(ref p) => p.clone(),
        None => std::env::current_dir()
            .map_err(|e| VendorSyncError::io("getting current directory", e))?,
    };

    let config_path = target_dir.join(LOCAL_CONFIG_NAME);

    if config_path.exists() && !args.force {
        return Err(VendorSyncError::User(format!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        )));
    }

    ensure_dir(&target_dir)?;

    fs::write(&config_path, INIT_TEMPLATE)
        .map_err(|e| VendorSyncError::io(format!("writing {}", config_path.display()), e))?;

    println!(
        "  {} Created project config ({})",
        CHECK,
        style(config_path.display()).dim()
    );

    Ok(())
}

fn ensure_dir(dir: &Path) -> VendorSyncResult<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)
            .map_err(|e| VendorSyncError::io(format!("creating directory {}", dir.display()), e))?;
    }
    Ok(())
}
