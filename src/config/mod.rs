//! Configuration management for vendorsync

pub mod schema;

pub use schema::{Config, DependencyEntry};

use crate::error::{VendorSyncError, VendorSyncResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the project-local config file, discovered by walking up
/// from the working directory
pub const LOCAL_CONFIG_NAME: &str = "vendorsync.toml";

/// Configuration manager
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Create a new config manager with the default global path
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
        }
    }

    /// Create a config manager with a custom global path
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Get the default global config file path
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("vendorsync")
            .join("config.toml")
    }

    /// Find a project-local `vendorsync.toml`, walking up from `start`
    pub fn find_local_config(start: &Path) -> Option<PathBuf> {
        let mut dir = Some(start);
        while let Some(current) = dir {
            let candidate = current.join(LOCAL_CONFIG_NAME);
            if candidate.is_file() {
                return Some(candidate);
            }
            dir = current.parent();
        }
        None
    }

    /// Load the global configuration, falling back to defaults if absent
    pub fn load(&self) -> VendorSyncResult<Config> {
        if !self.config_path.exists() {
            debug!("Config file not found, using defaults");
            return Ok(Config::default());
        }
        self.load_from_file(&self.config_path)
    }

    /// Load the global configuration with a project-local file overlaid.
    ///
    /// Tables merge key-wise with local values winning; arrays (the
    /// `[[dependency]]` list included) are replaced wholesale by the local
    /// file when it defines them.
    pub fn load_merged(&self, local: Option<&Path>) -> VendorSyncResult<Config> {
        let global = self.read_value(&self.config_path)?;

        let merged = match local {
            Some(path) => {
                let local_value = self.read_value(path)?;
                merge_values(global, local_value)
            }
            None => global,
        };

        merged
            .try_into()
            .map_err(|e: toml::de::Error| VendorSyncError::ConfigInvalid {
                path: local
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| self.config_path.clone()),
                reason: e.to_string(),
            })
    }

    /// Get the global config file path
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    fn read_value(&self, path: &Path) -> VendorSyncResult<toml::Value> {
        if !path.exists() {
            return Ok(toml::Value::Table(toml::value::Table::new()));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| VendorSyncError::io(format!("reading config from {}", path.display()), e))?;

        content
            .parse()
            .map_err(|e: toml::de::Error| VendorSyncError::ConfigInvalid {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
    }

    fn load_from_file(&self, path: &Path) -> VendorSyncResult<Config> {
        let content = fs::read_to_string(path)
            .map_err(|e| VendorSyncError::io(format!("reading config from {}", path.display()), e))?;

        toml::from_str(&content).map_err(|e| VendorSyncError::ConfigInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Key-wise table merge; non-table values (arrays included) from the
/// overlay replace the base
fn merge_values(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base), toml::Value::Table(overlay)) => {
            for (key, value) in overlay {
                let merged = match base.remove(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => value,
                };
                base.insert(key, merged);
            }
            toml::Value::Table(base)
        }
        (_, overlay) => overlay,
    }
}
