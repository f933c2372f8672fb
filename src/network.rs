//! TCP reachability probe
//!
//! Used by the status command to tell "this remote is down or unknown"
//! apart from harder local failures. Unknown hosts and connect timeouts
//! report unreachable; anything else (refused, permission) propagates.

use crate::error::{VendorSyncError, VendorSyncResult};
use std::io::ErrorKind;
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

/// Probe whether `host:port` accepts a TCP connection within `timeout`.
pub fn port_reachable(host: &str, port: u16, timeout: Duration) -> VendorSyncResult<bool> {
    // Name resolution failure means the host is unknown, not that we are
    let addrs: Vec<_> = match (host, port).to_socket_addrs() {
        Ok(addrs) => addrs.collect(),
        Err(_) => return Ok(false),
    };
    let Some(addr) = addrs.first() else {
        return Ok(false);
    };

    match TcpStream::connect_timeout(addr, timeout) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == ErrorKind::TimedOut => Ok(false),
        Err(e) => Err(VendorSyncError::io(format!("probing {}:{}", host, port), e)),
    }
}

/// Extract the host and port of an HTTP(S) URL for probing.
///
/// Returns `None` for URLs without a recognizable authority.
pub fn host_port_of_url(url: &str) -> Option<(String, u16)> {
    let (scheme, rest) = url.split_once("://")?;
    let default_port = match scheme {
        "http" => 80,
        "https" => 443,
        _ => return None,
    };

    let authority = rest.split(['/', '?', '#']).next()?;
    if authority.is_empty() {
        return None;
    }

    // IPv6 in brackets: [::1]:8080
    if let Some(bracketed) = authority.strip_prefix('[') {
        let (host, after) = bracketed.split_once(']')?;
        return match after.strip_prefix(':') {
            Some(port) => Some((host.to_string(), port.parse().ok()?)),
            None => Some((host.to_string(), default_port)),
        };
    }

    match authority.rsplit_once(':') {
        Some((host, port)) => {
            let port = port.parse().ok()?;
            Some((host.to_string(), port))
        }
        None => Some((authority.to_string(), default_port)),
    }
}
