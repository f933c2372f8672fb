//! Status command - check configuration and remote reachability

use crate::cli::commands::ProjectContext;
use crate::error::VendorSyncResult;
use crate::network::{host_port_of_url, port_reachable};
use console::{style, Emoji};
use std::collections::BTreeSet;
use std::time::Duration;

static CHECK: Emoji<'_, '_> = Emoji("✓ ", "[OK] ");
static CROSS: Emoji<'_, '_> = Emoji("✗ ", "[FAIL] ");
static WARN: Emoji<'_, '_> = Emoji("⚠ ", "[WARN] ");

/// Execute the status command
pub fn execute(ctx: &ProjectContext) -> VendorSyncResult<()> {
    println!("{}", style("Vendorsync Status").bold().cyan());
    println!();

    println!("{}", style("Configuration:").bold());
    let global_state = if ctx.global_config_path.exists() {
        "present"
    } else {
        "missing, using defaults"
    };
    println!(
        "  {} Global config: {} ({})",
        CHECK,
        ctx.global_config_path.display(),
        global_state
    );
    match &ctx.local_config_path {
        Some(path) => println!("  {} Local config: {}", CHECK, path.display()),
        None => println!("  {} No local vendorsync.toml found", WARN),
    }
    println!("  {} Cache dir: {}", CHECK, ctx.cache_dir().display());
    println!(
        "  {} Vendordep dir: {}",
        CHECK,
        ctx.vendordep_dir().display()
    );

    println!();
    println!("{}", style("Dependencies:").bold());
    println!("  {} {} configured", CHECK, ctx.config.dependencies.len());

    println!();
    println!("{}", style("Remotes:").bold());
    if ctx.config.network.offline {
        println!(
            "  {} {}",
            WARN,
            style("Offline mode: skipping reachability probes").yellow()
        );
        return Ok(());
    }

    let mut all_ok = true;
    let timeout = Duration::from_millis(ctx.config.network.probe_timeout_ms);
    for (host, port) in remote_endpoints(ctx) {
        if port_reachable(&host, port, timeout)? {
            println!("  {} {}:{} {}", CHECK, host, port, style("reachable").green());
        } else {
            println!(
                "  {} {}:{} {}",
                CROSS,
                host,
                port,
                style("unreachable (unknown host or timeout)").red()
            );
            all_ok = false;
        }
    }

    println!();
    if all_ok {
        println!("{}", style("All remotes reachable").green().bold());
    } else {
        println!(
            "{}",
            style("Some remotes unreachable - consider --offline").yellow().bold()
        );
    }

    Ok(())
}

/// Unique probe targets across the configured descriptor URLs
fn remote_endpoints(ctx: &ProjectContext) -> BTreeSet<(String, u16)> {
    ctx.config
        .dependencies
        .iter()
        .filter_map(|entry| host_port_of_url(&entry.url))
        .collect()
}
