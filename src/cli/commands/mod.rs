//! CLI command implementations

pub mod check;
pub mod init;
pub mod list;
pub mod status;
pub mod update;

pub use check::execute as check;
pub use init::execute as init;
pub use list::execute as list;
pub use status::execute as status;
pub use update::execute as update;

use crate::config::Config;
use crate::descriptor::VendorDescriptor;
use crate::error::{VendorSyncError, VendorSyncResult};
use std::path::{Path, PathBuf};

/// Resolved per-invocation context shared by the commands
pub struct ProjectContext {
    pub config: Config,
    /// Project root: the directory of the local config file when one was
    /// found, otherwise the working directory
    pub root: PathBuf,
    pub global_config_path: PathBuf,
    pub local_config_path: Option<PathBuf>,
}

impl ProjectContext {
    /// The effective cache directory
    pub fn cache_dir(&self) -> PathBuf {
        self.config.cache.resolved_dir()
    }

    /// The project's vendordep directory
    pub fn vendordep_dir(&self) -> PathBuf {
        self.root.join(&self.config.project.vendordep_dir)
    }

    /// Build descriptors for every configured dependency
    pub fn descriptors(&self) -> VendorSyncResult<Vec<VendorDescriptor>> {
        let cache_dir = self.cache_dir();
        let vendordep_dir = self.vendordep_dir();

        self.config
            .dependencies
            .iter()
            .map(|entry| VendorDescriptor::new(&entry.name, &entry.url, &cache_dir, &vendordep_dir))
            .collect()
    }

    /// Build descriptors, restricted to `names` when non-empty.
    ///
    /// Fails when a requested name matches no configured dependency.
    pub fn descriptors_filtered(&self, names: &[String]) -> VendorSyncResult<Vec<VendorDescriptor>> {
        let all = self.descriptors()?;
        if names.is_empty() {
            return Ok(all);
        }

        for name in names {
            if !all.iter().any(|d| d.name() == name) {
                return Err(VendorSyncError::User(format!(
                    "No configured dependency named '{}'. See 'vendorsync list'.",
                    name
                )));
            }
        }

        Ok(all
            .into_iter()
            .filter(|d| names.iter().any(|n| n == d.name()))
            .collect())
    }
}

/// Shared "nothing configured" notice
pub(crate) fn warn_no_dependencies(local_config: Option<&Path>) {
    let location = local_config
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "vendorsync.toml".to_string());
    println!(
        "No vendor dependencies configured. Add [[dependency]] entries to {}.",
        location
    );
}
