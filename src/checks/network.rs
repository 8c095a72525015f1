//! Basic internet reachability check.

use std::net::{SocketAddr, TcpStream};
use std::time::Duration;

use crate::record::CheckRecord;

/// Check name used on emitted records.
pub const CHECK_NAME: &str = "network";

/// Google public DNS; a TCP connect to port 53 is a cheap liveness signal
/// that works even where ICMP is filtered.
const PROBE_ADDR: &str = "8.8.8.8:53";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Probe basic internet connectivity against the fixed public resolver.
pub fn network_reachability() -> CheckRecord {
    let addr: SocketAddr = match PROBE_ADDR.parse() {
        Ok(addr) => addr,
        Err(e) => return CheckRecord::fail(CHECK_NAME, format!("bad probe address: {e}")),
    };
    reachability_of(addr, CONNECT_TIMEOUT)
}

/// Probe TCP reachability of an arbitrary address.
pub fn reachability_of(addr: SocketAddr, timeout: Duration) -> CheckRecord {
    match TcpStream::connect_timeout(&addr, timeout) {
        Ok(_stream) => CheckRecord::pass(CHECK_NAME, "basic internet connectivity OK"),
        Err(e) => {
            tracing::debug!("connect to {} failed: {}", addr, e);
            CheckRecord::fail(CHECK_NAME, format!("cannot reach the internet: {e}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Status;
    use std::net::TcpListener;

    #[test]
    fn reachable_listener_passes() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let record = reachability_of(addr, Duration::from_secs(1));
        assert_eq!(record.status, Status::Pass);
        assert_eq!(record.name, CHECK_NAME);
    }

    #[test]
    fn refused_connection_fails() {
        // Bind to grab a free port, then drop the listener so connects are refused.
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let record = reachability_of(addr, Duration::from_secs(1));
        assert_eq!(record.status, Status::Fail);
        assert!(record.message.contains("cannot reach the internet"));
        assert!(record.solution.is_none());
    }
}
