//! Error types for vendorsync
//!
//! All modules use `VendorSyncResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for vendorsync operations
pub type VendorSyncResult<T> = Result<T, VendorSyncError>;

/// All errors that can occur in vendorsync
#[derive(Error, Debug)]
pub enum VendorSyncError {
    // Download errors
    #[error("Download from `{url}` failed: HTTP {status}: {body}")]
    Download {
        url: String,
        status: u16,
        body: String,
    },

    #[error("Download from `{url}` failed: no response body")]
    EmptyDownload { url: String },

    #[error("HTTP request to `{url}` failed: {source}")]
    Http {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    // Sync errors
    #[error("Vendor dependency unavailable: {name}")]
    MissingSource { name: String },

    #[error("Invalid descriptor URL `{url}`: {reason}")]
    UrlInvalid { url: String, reason: String },

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    // General errors
    #[error("{0}")]
    User(String),
}

impl VendorSyncError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::MissingSource { .. } => Some("Run again without --offline to download it"),
            Self::Download { .. } | Self::EmptyDownload { .. } => {
                Some("Check the descriptor URL in vendorsync.toml")
            }
            Self::Http { .. } => Some("Check your network connection, or use --offline"),
            _ => None,
        }
    }
}
