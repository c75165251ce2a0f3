//! Network reachability check for online lookups.

use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use crate::error::{Error, Result};

/// Open (and drop) a TCP connection to `host` (`host:port`).
///
/// Every resolved address is tried; the first successful connection wins.
pub fn check(host: &str, timeout: Duration) -> Result<()> {
    let addrs = host
        .to_socket_addrs()
        .map_err(|e| Error::Connectivity(format!("cannot resolve {}: {}", host, e)))?;

    let mut last_err = None;
    for addr in addrs {
        match TcpStream::connect_timeout(&addr, timeout) {
            Ok(_) => {
                tracing::debug!("Reached {} via {}", host, addr);
                return Ok(());
            }
            Err(e) => last_err = Some(e),
        }
    }

    Err(Error::Connectivity(match last_err {
        Some(e) => format!("cannot reach {}: {}", host, e),
        None => format!("no addresses for {}", host),
    }))
}
