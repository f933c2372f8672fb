//! Vendor dependency descriptors
//!
//! A descriptor ties a named remote JSON URL to its two on-disk locations:
//! the cache copy and the project copy. The file name is derived from the
//! URL's final path segment, normalized to end in `.json`.

use crate::error::{VendorSyncError, VendorSyncResult};
use std::path::{Path, PathBuf};

/// A single vendor dependency: remote URL plus cache and project file paths.
///
/// Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorDescriptor {
    name: String,
    url: String,
    file_name: String,
    cache_file: PathBuf,
    project_file: PathBuf,
}

impl VendorDescriptor {
    /// Build a descriptor for `url`, placing its copies under `cache_dir`
    /// and `project_dir` with the derived file name.
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        cache_dir: &Path,
        project_dir: &Path,
    ) -> VendorSyncResult<Self> {
        let url = url.into();
        let file_name = file_name_from_url(&url)?;
        Ok(Self {
            name: name.into(),
            cache_file: cache_dir.join(&file_name),
            project_file: project_dir.join(&file_name),
            url,
            file_name,
        })
    }

    /// Configured display name (e.g. "Phoenix")
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Remote descriptor URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// File name shared by the cache and project copies
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Path of the cached copy
    pub fn cache_file(&self) -> &Path {
        &self.cache_file
    }

    /// Path of the project copy
    pub fn project_file(&self) -> &Path {
        &self.project_file
    }
}

/// Derive the local file name from the URL's final path segment.
///
/// The segment is normalized to end in `.json` so that URLs like
/// `.../Phoenix-latest` and `.../Phoenix-latest.json` land on the same file.
fn file_name_from_url(url: &str) -> VendorSyncResult<String> {
    let without_scheme = url.split_once("://").map(|(_, rest)| rest).unwrap_or(url);

    let (_, path) = without_scheme
        .split_once('/')
        .ok_or_else(|| VendorSyncError::UrlInvalid {
            url: url.to_string(),
            reason: "no path component".to_string(),
        })?;

    let path = path.split(['?', '#']).next().unwrap_or("");
    let segment = path.rsplit('/').next().unwrap_or("");

    if segment.is_empty() {
        return Err(VendorSyncError::UrlInvalid {
            url: url.to_string(),
            reason: "empty final path segment".to_string(),
        });
    }

    if segment.ends_with(".json") {
        Ok(segment.to_string())
    } else {
        Ok(format!("{}.json", segment))
    }
}
