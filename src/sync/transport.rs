//! HTTP transport abstraction
//!
//! The sync engine talks to remotes through the `HttpTransport` trait so
//! tests can inject a scripted transport. The production implementation
//! wraps a single long-lived `ureq::Agent`.

use crate::error::{VendorSyncError, VendorSyncResult};
use chrono::{DateTime, Utc};
use std::time::Duration;
use ureq::http::header::LAST_MODIFIED;
use ureq::http::HeaderMap;

/// Result of a metadata-only (HEAD) request
#[derive(Debug, Clone)]
pub struct RemoteMetadata {
    pub status: u16,
    pub last_modified: Option<DateTime<Utc>>,
}

/// Result of a full (GET) request
#[derive(Debug, Clone)]
pub struct RemoteContent {
    pub status: u16,
    pub last_modified: Option<DateTime<Utc>>,
    pub body: Vec<u8>,
}

/// Abstract HTTP operations needed by the sync engine
///
/// Implementations surface non-2xx statuses as values, not errors, so the
/// engine can attach status code and body text to its download error.
pub trait HttpTransport {
    /// Metadata-only request (HTTP HEAD)
    fn head(&self, url: &str) -> VendorSyncResult<RemoteMetadata>;

    /// Full download request (HTTP GET)
    fn get(&self, url: &str) -> VendorSyncResult<RemoteContent>;
}

/// Production transport backed by a shared `ureq::Agent`
///
/// Follows redirects; non-2xx statuses are returned, not raised.
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new(timeout: Duration) -> Self {
        let config = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .max_redirects(10)
            .timeout_global(Some(timeout))
            .build();
        Self {
            agent: config.new_agent(),
        }
    }
}

impl HttpTransport for UreqTransport {
    fn head(&self, url: &str) -> VendorSyncResult<RemoteMetadata> {
        let response = self
            .agent
            .head(url)
            .call()
            .map_err(|e| http_error(url, e))?;

        Ok(RemoteMetadata {
            status: response.status().as_u16(),
            last_modified: last_modified_of(response.headers()),
        })
    }

    fn get(&self, url: &str) -> VendorSyncResult<RemoteContent> {
        let response = self.agent.get(url).call().map_err(|e| http_error(url, e))?;

        let status = response.status().as_u16();
        let last_modified = last_modified_of(response.headers());
        let body = response
            .into_body()
            .read_to_vec()
            .map_err(|e| http_error(url, e))?;

        Ok(RemoteContent {
            status,
            last_modified,
            body,
        })
    }
}

fn http_error(url: &str, source: ureq::Error) -> VendorSyncError {
    VendorSyncError::Http {
        url: url.to_string(),
        source: Box::new(source),
    }
}

fn last_modified_of(headers: &HeaderMap) -> Option<DateTime<Utc>> {
    headers
        .get(LAST_MODIFIED)?
        .to_str()
        .ok()
        .and_then(parse_http_date)
}

/// Parse an HTTP date header value (RFC 1123, e.g.
/// `Mon, 01 Jan 2024 00:00:00 GMT`)
pub fn parse_http_date(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
