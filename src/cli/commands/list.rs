//! List command - show configured vendor dependencies and their local state

use crate::cli::args::{ListArgs, OutputFormat};
use crate::cli::commands::{warn_no_dependencies, ProjectContext};
use crate::descriptor::VendorDescriptor;
use crate::error::VendorSyncResult;
use crate::sync::mtime_if_exists;
use crate::vendordep::VendorDepFile;
use chrono::{DateTime, Utc};
use console::style;
use serde::Serialize;

/// One row of list output
#[derive(Debug, Serialize)]
struct ListRow {
    name: String,
    file_name: String,
    url: String,
    version: Option<String>,
    cache_modified: Option<DateTime<Utc>>,
    project_modified: Option<DateTime<Utc>>,
}

/// Execute the list command
pub fn execute(args: ListArgs, ctx: &ProjectContext) -> VendorSyncResult<()> {
    let descriptors = ctx.descriptors()?;
    if descriptors.is_empty() {
        if matches!(args.format, OutputFormat::Json) {
            println!("[]");
        } else {
            warn_no_dependencies(ctx.local_config_path.as_deref());
        }
        return Ok(());
    }

    let rows: Vec<ListRow> = descriptors
        .iter()
        .map(row_for)
        .collect::<VendorSyncResult<_>>()?;

    match args.format {
        OutputFormat::Table => print_table(&rows),
        OutputFormat::Json => print_json(&rows)?,
        OutputFormat::Plain => print_plain(&rows),
    }

    Ok(())
}

fn row_for(descriptor: &VendorDescriptor) -> VendorSyncResult<ListRow> {
    let cache_modified = mtime_if_exists(descriptor.cache_file())?;
    let project_modified = mtime_if_exists(descriptor.project_file())?;

    // Prefer the copy the build actually consumes
    let version = [descriptor.project_file(), descriptor.cache_file()]
        .into_iter()
        .find(|p| p.exists())
        .and_then(|p| VendorDepFile::load(p).ok())
        .and_then(|dep| dep.version);

    Ok(ListRow {
        name: descriptor.name().to_string(),
        file_name: descriptor.file_name().to_string(),
        url: descriptor.url().to_string(),
        version,
        cache_modified,
        project_modified,
    })
}

fn print_table(rows: &[ListRow]) {
    println!(
        "{:<16} {:<12} {:<17} {:<17} {:<30}",
        style("NAME").bold(),
        style("VERSION").bold(),
        style("CACHE").bold(),
        style("PROJECT").bold(),
        style("FILE").bold()
    );
    println!("{}", "-".repeat(94));

    for row in rows {
        println!(
            "{:<16} {:<12} {:<17} {:<17} {:<30}",
            row.name,
            row.version.as_deref().unwrap_or("?"),
            format_mtime(row.cache_modified),
            format_mtime(row.project_modified),
            row.file_name
        );
    }

    println!();
    println!("{} dependency(ies)", rows.len());
}

fn print_json(rows: &[ListRow]) -> VendorSyncResult<()> {
    println!("{}", serde_json::to_string_pretty(rows)?);
    Ok(())
}

fn print_plain(rows: &[ListRow]) {
    for row in rows {
        println!("{}", row.name);
    }
}

fn format_mtime(mtime: Option<DateTime<Utc>>) -> String {
    match mtime {
        Some(time) => time.format("%Y-%m-%d %H:%M").to_string(),
        None => "missing".to_string(),
    }
}
