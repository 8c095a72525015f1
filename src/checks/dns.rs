//! Hostname resolution check.

use std::net::ToSocketAddrs;

use crate::record::CheckRecord;

/// Check name used on emitted records.
pub const CHECK_NAME: &str = "dns resolution";

/// Hostname resolved when the caller does not override it.
pub const DEFAULT_HOSTNAME: &str = "github.com";

const DNS_SOLUTION: &str = "try an alternate DNS server such as 8.8.8.8 or 1.1.1.1";

/// Resolve a hostname through the system resolver.
///
/// The port is irrelevant to resolution; 443 is used because that is the
/// port every later check cares about.
pub fn dns_resolution(hostname: &str) -> CheckRecord {
    match (hostname, 443u16).to_socket_addrs() {
        Ok(mut addrs) => match addrs.next() {
            Some(addr) => CheckRecord::pass(
                CHECK_NAME,
                format!("{} resolves to {}", hostname, addr.ip()),
            ),
            None => CheckRecord::fail(
                CHECK_NAME,
                format!("could not resolve hostname: {hostname}"),
            )
            .with_solution(DNS_SOLUTION),
        },
        Err(e) => {
            tracing::debug!("resolution of {} failed: {}", hostname, e);
            CheckRecord::fail(
                CHECK_NAME,
                format!("could not resolve hostname: {hostname}"),
            )
            .with_solution(DNS_SOLUTION)
        }
    }
}
