//! Vendor dependency synchronization
//!
//! Keeps two on-disk copies of each descriptor current with minimal network
//! use: a cache copy annotated with the remote's `Last-Modified` (stored as
//! the file's mtime) and the project copy consumed by the build.
//!
//! Freshness is decided by an HTTP HEAD against the cache mtime; a full GET
//! only happens when the check cannot prove the cache is current. Downloads
//! land in a temporary sibling file and are renamed into place, so a partial
//! transfer never corrupts the cache.
//!
//! # Sync decisions
//!
//! | Cache | Project | Action |
//! |-------|---------|--------|
//! | missing | missing | error (nothing to serve) |
//! | missing | present | keep project copy |
//! | present | missing or older | copy cache over project |
//! | present | same or newer | no copy |

pub mod transport;

pub use transport::{HttpTransport, RemoteContent, RemoteMetadata, UreqTransport};

use crate::descriptor::VendorDescriptor;
use crate::error::{VendorSyncError, VendorSyncResult};
use chrono::{DateTime, Utc};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::time::SystemTime;
use tracing::debug;

/// Whether a cache entry reflects the latest remote content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    UpToDate,
    Stale,
}

/// What happened to one descriptor during a sync pass
#[derive(Debug, Clone)]
pub struct SyncOutcome {
    pub name: String,
    pub file_name: String,
    pub url: String,
    /// Cache entry was refreshed from the remote
    pub refreshed: bool,
    /// Project copy was (re)written from the cache
    pub copied: bool,
}

/// Sync engine for a set of vendor descriptors
///
/// Holds the HTTP transport by reference; one instance serves a whole
/// invocation. Descriptors are processed independently and sequentially.
pub struct VendorSync<'a> {
    transport: &'a dyn HttpTransport,
    offline: bool,
}

impl<'a> VendorSync<'a> {
    pub fn new(transport: &'a dyn HttpTransport, offline: bool) -> Self {
        Self { transport, offline }
    }

    pub fn offline(&self) -> bool {
        self.offline
    }

    /// Compare the remote's `Last-Modified` against the cache entry's mtime.
    ///
    /// If either timestamp is unavailable (no cache entry yet, or the server
    /// omits the header) the result is `Stale`: always refresh when freshness
    /// cannot be proven.
    pub fn check_freshness(&self, desc: &VendorDescriptor) -> VendorSyncResult<Freshness> {
        let local = mtime_if_exists(desc.cache_file())?;
        let meta = self.transport.head(desc.url())?;

        if !is_success(meta.status) {
            return Err(VendorSyncError::Download {
                url: desc.url().to_string(),
                status: meta.status,
                body: "<no message>".to_string(),
            });
        }

        debug!(
            file = desc.file_name(),
            local = ?local,
            remote = ?meta.last_modified,
            "freshness check"
        );

        match (local, meta.last_modified) {
            (Some(local), Some(remote)) if local >= remote => Ok(Freshness::UpToDate),
            _ => Ok(Freshness::Stale),
        }
    }

    /// Download the descriptor and replace the cache entry.
    ///
    /// The body is written to a temporary sibling file which is renamed over
    /// the cache entry only after the complete transfer; its mtime is set to
    /// the remote's `Last-Modified` when the server provides one.
    pub fn refresh(&self, desc: &VendorDescriptor) -> VendorSyncResult<()> {
        let remote = self.transport.get(desc.url())?;

        if !is_success(remote.status) {
            return Err(VendorSyncError::Download {
                url: desc.url().to_string(),
                status: remote.status,
                body: String::from_utf8_lossy(&remote.body).into_owned(),
            });
        }
        if remote.body.is_empty() {
            return Err(VendorSyncError::EmptyDownload {
                url: desc.url().to_string(),
            });
        }

        let cache_file = desc.cache_file();
        ensure_parent_dir(cache_file)?;

        let temp = cache_file.with_extension("json.part");
        fs::write(&temp, &remote.body)
            .map_err(|e| VendorSyncError::io(format!("writing {}", temp.display()), e))?;
        if let Some(last_modified) = remote.last_modified {
            set_mtime(&temp, last_modified)?;
        }
        fs::rename(&temp, cache_file).map_err(|e| {
            VendorSyncError::io(format!("replacing {}", cache_file.display()), e)
        })?;

        debug!(file = desc.file_name(), url = desc.url(), "cache refreshed");
        Ok(())
    }

    /// Copy the cache entry over the project copy when the latter is missing
    /// or older, preserving the modification time. Returns whether a copy
    /// happened.
    pub fn sync_to_project(&self, desc: &VendorDescriptor) -> VendorSyncResult<bool> {
        let cache = mtime_if_exists(desc.cache_file())?;
        let project = mtime_if_exists(desc.project_file())?;

        match (cache, project) {
            (None, None) => Err(VendorSyncError::MissingSource {
                name: desc.file_name().to_string(),
            }),
            (None, Some(_)) => Ok(false),
            (Some(cache), Some(project)) if project >= cache => Ok(false),
            (Some(cache_time), _) => {
                ensure_parent_dir(desc.project_file())?;
                fs::copy(desc.cache_file(), desc.project_file()).map_err(|e| {
                    VendorSyncError::io(
                        format!(
                            "copying {} to {}",
                            desc.cache_file().display(),
                            desc.project_file().display()
                        ),
                        e,
                    )
                })?;
                set_mtime(desc.project_file(), cache_time)?;
                debug!(file = desc.file_name(), "project copy updated");
                Ok(true)
            }
        }
    }

    /// Full sync of one descriptor: freshness check (computed once per
    /// invocation), refresh when stale, then project copy. Offline mode
    /// skips the network steps entirely.
    pub fn sync(&self, desc: &VendorDescriptor) -> VendorSyncResult<SyncOutcome> {
        let mut refreshed = false;

        if self.offline {
            debug!(
                file = desc.file_name(),
                "offline mode, not checking remote"
            );
        } else {
            let freshness = self.check_freshness(desc)?;
            if freshness == Freshness::Stale {
                self.refresh(desc)?;
                refreshed = true;
            }
        }

        let copied = self.sync_to_project(desc)?;

        Ok(SyncOutcome {
            name: desc.name().to_string(),
            file_name: desc.file_name().to_string(),
            url: desc.url().to_string(),
            refreshed,
            copied,
        })
    }

    /// Sync every descriptor in order, failing fast on the first error.
    pub fn sync_all(&self, descs: &[VendorDescriptor]) -> VendorSyncResult<Vec<SyncOutcome>> {
        descs.iter().map(|desc| self.sync(desc)).collect()
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Modification time of `path`, or `None` if it does not exist
pub(crate) fn mtime_if_exists(path: &Path) -> VendorSyncResult<Option<DateTime<Utc>>> {
    match fs::metadata(path) {
        Ok(meta) => {
            let modified = meta.modified().map_err(|e| {
                VendorSyncError::io(format!("reading mtime of {}", path.display()), e)
            })?;
            Ok(Some(modified.into()))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(VendorSyncError::io(
            format!("reading metadata of {}", path.display()),
            e,
        )),
    }
}

fn set_mtime(path: &Path, time: DateTime<Utc>) -> VendorSyncResult<()> {
    let file = fs::File::options()
        .write(true)
        .open(path)
        .map_err(|e| VendorSyncError::io(format!("opening {}", path.display()), e))?;
    file.set_modified(SystemTime::from(time))
        .map_err(|e| VendorSyncError::io(format!("setting mtime of {}", path.display()), e))
}

fn ensure_parent_dir(path: &Path) -> VendorSyncResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| VendorSyncError::io(format!("creating {}", parent.display()), e))?;
    }
    Ok(())
}
