//! Configuration schema for vendorsync
//!
//! Configuration is stored at `~/.config/vendorsync/config.toml`, with a
//! project-local `vendorsync.toml` overlaid on top (see `ConfigManager`).

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Project layout settings
    pub project: ProjectConfig,

    /// Cache settings
    pub cache: CacheConfig,

    /// Network settings
    pub network: NetworkConfig,

    /// Vendor dependency descriptors
    #[serde(rename = "dependency")]
    pub dependencies: Vec<DependencyEntry>,
}

/// Project layout settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Directory holding the project's vendordep JSON files,
    /// relative to the project root
    pub vendordep_dir: PathBuf,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            vendordep_dir: PathBuf::from("vendordeps"),
        }
    }
}

/// Cache settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Cache directory override (default: `<user cache dir>/vendorsync`)
    pub dir: Option<PathBuf>,
}

impl CacheConfig {
    /// The effective cache directory
    pub fn resolved_dir(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(|| {
            dirs::cache_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("vendorsync")
        })
    }
}

/// Network settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Suppress all network calls and rely on local files only
    pub offline: bool,

    /// Global timeout for HEAD/GET requests, in seconds
    pub http_timeout_secs: u64,

    /// Connect timeout for the status command's reachability probe,
    /// in milliseconds
    pub probe_timeout_ms: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            offline: false,
            http_timeout_secs: 30,
            probe_timeout_ms: 500,
        }
    }
}

/// One vendor dependency: a display name and its descriptor URL
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DependencyEntry {
    pub name: String,
    pub url: String,
}
