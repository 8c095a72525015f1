//! Git installation and configuration check.

use std::time::Duration;

use crate::record::CheckRecord;
use crate::shell::run_with_timeout;

/// Check name for the installation record.
pub const CHECK_NAME: &str = "git version";

const GIT_PROGRAM: &str = "git";
const COMMAND_TIMEOUT: Duration = Duration::from_secs(5);
const INSTALL_SOLUTION: &str = "install Git: https://git-scm.com/downloads";

/// Config keys inspected after the version check, with display labels.
const CONFIG_KEYS: &[(&str, &str)] = &[
    ("user.name", "user name"),
    ("user.email", "email"),
    ("http.sslVerify", "TLS verification"),
];

/// Check that git is installed, then report each global config key.
///
/// Emits one record for the installation itself and, when git is present,
/// one per config key (PASS if set, WARNING if unset — an unset key is
/// never a failure). A missing or broken git short-circuits the key checks.
pub fn tool_and_config() -> Vec<CheckRecord> {
    tool_and_config_with(GIT_PROGRAM)
}

/// Variant parameterized over the git program path, for tests.
pub(crate) fn tool_and_config_with(git: &str) -> Vec<CheckRecord> {
    let mut records = Vec::new();

    match run_with_timeout(git, &["--version"], None, COMMAND_TIMEOUT) {
        Ok(result) if result.success => {
            let message = match extract_version(&result.stdout) {
                Some(version) => format!("git {version}"),
                None => result.stdout.trim().to_string(),
            };
            records.push(CheckRecord::pass(CHECK_NAME, message));
        }
        Ok(result) => {
            records.push(
                CheckRecord::fail(
                    CHECK_NAME,
                    format!(
                        "git --version exited with code {:?}",
                        result.exit_code
                    ),
                )
                .with_solution(INSTALL_SOLUTION),
            );
            return records;
        }
        Err(e) => {
            tracing::debug!("git version query failed: {}", e);
            records.push(
                CheckRecord::fail(CHECK_NAME, "git is not installed or not on PATH")
                    .with_solution(INSTALL_SOLUTION),
            );
            return records;
        }
    }

    for (key, label) in CONFIG_KEYS {
        let name = format!("git config ({label})");
        match run_with_timeout(git, &["config", "--global", key], None, COMMAND_TIMEOUT) {
            Ok(result) if result.success => {
                records.push(CheckRecord::pass(
                    &name,
                    format!("{} = {}", key, result.stdout.trim()),
                ));
            }
            // Unset key or query error: worth a look, never a blocker.
            _ => records.push(CheckRecord::warning(&name, format!("{key} is not set"))),
        }
    }

    records
}

/// Extract a version number from command output.
fn extract_version(output: &str) -> Option<String> {
    let patterns = [r"(\d+\.\d+\.\d+)", r"version\s+(\d+\.\d+)", r"v(\d+\.\d+)"];

    for pattern in &patterns {
        if let Ok(re) = regex::Regex::new(pattern) {
            if let Some(caps) = re.captures(output) {
                if let Some(m) = caps.get(1) {
                    return Some(m.as_str().to_string());
                }
            }
        }
    }

    None
}
