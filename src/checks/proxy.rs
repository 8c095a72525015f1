//! Proxy environment variable check.
//!
//! A configured proxy is the single most common reason a clone works in a
//! browser-adjacent network but fails on the command line, so any proxy
//! variable found is surfaced as a warning with its value.

use std::env::VarError;

use crate::record::CheckRecord;

/// Check name used on emitted records.
pub const CHECK_NAME: &str = "proxy environment";

/// Variables inspected, both case variants of each concept.
const PROXY_VARS: [&str; 4] = ["http_proxy", "https_proxy", "HTTP_PROXY", "HTTPS_PROXY"];

/// Inspect the process environment for proxy configuration.
pub fn proxy_environment() -> Vec<CheckRecord> {
    proxy_environment_with_env(|key| std::env::var(key))
}

/// Variant with a custom env var lookup function.
///
/// This allows testing without modifying actual environment variables.
pub fn proxy_environment_with_env<F>(env_fn: F) -> Vec<CheckRecord>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    let mut records = Vec::new();

    for var in PROXY_VARS {
        if let Ok(value) = env_fn(var) {
            if !value.is_empty() {
                records.push(CheckRecord::warning(
                    CHECK_NAME,
                    format!("proxy configured via {var}={value}"),
                ));
            }
        }
    }

    if records.is_empty() {
        records.push(CheckRecord::pass(CHECK_NAME, "no proxy variables set"));
    }

    records
}
