//! HTTPS reachability check against the Git host.

use std::time::Duration;

use reqwest::StatusCode;

use crate::record::CheckRecord;

/// Check name used on emitted records.
pub const CHECK_NAME: &str = "https access";

/// Fixed host probed by the unconditional check.
pub const GITHUB_URL: &str = "https://github.com";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Probe HTTPS access to github.com.
pub fn https_reachability() -> CheckRecord {
    https_reachability_of(GITHUB_URL, REQUEST_TIMEOUT)
}

/// Probe HTTPS access to an arbitrary URL.
///
/// 200 is a PASS, any other status is a WARNING naming the code, and a
/// transport-level failure (timeout, connection refused, TLS) is a FAIL.
pub fn https_reachability_of(url: &str, timeout: Duration) -> CheckRecord {
    let client = match reqwest::blocking::Client::builder().timeout(timeout).build() {
        Ok(client) => client,
        Err(e) => return CheckRecord::fail(CHECK_NAME, format!("cannot reach {url}: {e}")),
    };

    match client.get(url).send() {
        Ok(response) if response.status() == StatusCode::OK => {
            CheckRecord::pass(CHECK_NAME, format!("{url} is reachable"))
        }
        Ok(response) => CheckRecord::warning(
            CHECK_NAME,
            format!("{} returned status {}", url, response.status().as_u16()),
        ),
        Err(e) => {
            tracing::debug!("request to {} failed: {}", url, e);
            CheckRecord::fail(CHECK_NAME, format!("cannot reach {url}: {e}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Status;
    use httpmock::prelude::*;

    #[test]
    fn ok_response_passes() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/");
            then.status(200).body("<html></html>");
        });

        let record = https_reachability_of(&server.url("/"), Duration::from_secs(5));

        mock.assert();
        assert_eq!(record.status, Status::Pass);
        assert!(record.message.contains("is reachable"));
    }

    #[test]
    fn non_200_status_warns_with_code() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/");
            then.status(404);
        });

        let record = https_reachability_of(&server.url("/"), Duration::from_secs(5));
        assert_eq!(record.status, Status::Warning);
        assert!(record.message.contains("404"));
    }

    #[test]
    fn connection_failure_fails() {
        // Grab a free port with no listener behind it.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://127.0.0.1:{}/", listener.local_addr().unwrap().port());
        drop(listener);

        let record = https_reachability_of(&url, Duration::from_secs(2));
        assert_eq!(record.status, Status::Fail);
        assert!(record.message.contains("cannot reach"));
    }
}
