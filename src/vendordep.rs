//! Parsed vendor dependency descriptor files
//!
//! WPILib vendordep JSONs carry more than we need (maven coordinates,
//! JNI binaries); only the identifying fields are modeled here and unknown
//! fields are ignored.

use crate::error::{VendorSyncError, VendorSyncResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Identifying fields of a vendordep JSON file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorDepFile {
    pub file_name: Option<String>,
    pub name: Option<String>,
    pub version: Option<String>,
    pub uuid: Option<String>,
    pub json_url: Option<String>,
    #[serde(default)]
    pub maven_urls: Vec<String>,
}

impl VendorDepFile {
    /// Read and parse a descriptor file from disk
    pub fn load(path: &Path) -> VendorSyncResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| VendorSyncError::io(format!("reading {}", path.display()), e))?;
        Ok(serde_json::from_str(&content)?)
    }
}
