//! Update command - refresh vendor dependencies and sync them into the project

use crate::cli::args::UpdateArgs;
use crate::cli::commands::{warn_no_dependencies, ProjectContext};
use crate::error::VendorSyncResult;
use crate::sync::{UreqTransport, VendorSync};
use console::{style, Emoji};
use std::time::Duration;

static CHECK: Emoji<'_, '_> = Emoji("✓ ", "[OK] ");
static WARN: Emoji<'_, '_> = Emoji("⚠ ", "[WARN] ");

/// Execute the update command
pub fn execute(args: UpdateArgs, ctx: &ProjectContext) -> VendorSyncResult<()> {
    let descriptors = ctx.descriptors_filtered(&args.names)?;
    if descriptors.is_empty() {
        warn_no_dependencies(ctx.local_config_path.as_deref());
        return Ok(());
    }

    let offline = ctx.config.network.offline;
    if offline {
        println!(
            "{} {}",
            WARN,
            style("Offline mode: using cached files only.").yellow()
        );
    }

    let transport =
        UreqTransport::new(Duration::from_secs(ctx.config.network.http_timeout_secs));
    let sync = VendorSync::new(&transport, offline);

    let mut updated = 0;
    for outcome in sync.sync_all(&descriptors)? {
        if outcome.refreshed {
            println!(
                "  {} Updated {} from {}",
                CHECK,
                style(&outcome.file_name).bold(),
                outcome.url
            );
            updated += 1;
        } else if outcome.copied {
            println!("  {} Copied {} into project", CHECK, outcome.file_name);
        } else {
            println!("  {} {} is up-to-date.", CHECK, outcome.file_name);
        }
    }

    println!();
    if updated > 0 {
        println!(
            "{}",
            style(format!("Updated {} vendor dependency file(s).", updated)).green()
        );
    } else {
        println!("{}", style("All vendor dependencies are up-to-date.").green());
    }

    Ok(())
}
