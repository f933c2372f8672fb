//! Check command - report available vendor dependency updates

use crate::cli::args::CheckArgs;
use crate::cli::commands::{warn_no_dependencies, ProjectContext};
use crate::error::VendorSyncResult;
use crate::sync::{Freshness, UreqTransport, VendorSync};
use console::{style, Emoji};
use std::time::Duration;

static CHECK: Emoji<'_, '_> = Emoji("✓ ", "[OK] ");
static WARN: Emoji<'_, '_> = Emoji("⚠ ", "[WARN] ");

/// Execute the check command
pub fn execute(args: CheckArgs, ctx: &ProjectContext) -> VendorSyncResult<()> {
    let descriptors = ctx.descriptors_filtered(&args.names)?;
    if descriptors.is_empty() {
        warn_no_dependencies(ctx.local_config_path.as_deref());
        return Ok(());
    }

    if ctx.config.network.offline {
        println!(
            "{} {}",
            WARN,
            style("Offline mode: not checking remotes.").yellow()
        );
        return Ok(());
    }

    let transport =
        UreqTransport::new(Duration::from_secs(ctx.config.network.http_timeout_secs));
    let sync = VendorSync::new(&transport, false);

    let mut stale = 0;
    for descriptor in &descriptors {
        match sync.check_freshness(descriptor)? {
            Freshness::UpToDate => {
                println!("  {} {} is up-to-date.", CHECK, descriptor.file_name());
            }
            Freshness::Stale => {
                println!(
                    "  {} Update available for {} at {}",
                    WARN,
                    style(descriptor.file_name()).bold(),
                    descriptor.url()
                );
                stale += 1;
            }
        }
    }

    println!();
    if stale > 0 {
        println!(
            "{}",
            style(format!(
                "Run 'vendorsync update' to refresh {} file(s).",
                stale
            ))
            .yellow()
        );
    } else {
        println!("{}", style("All vendor dependencies are up-to-date.").green());
    }

    Ok(())
}
