//! End-to-end clone check.

use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::error::GitprobeError;
use crate::record::CheckRecord;
use crate::shell::run_with_timeout;

/// Check name used on emitted records.
pub const CHECK_NAME: &str = "git clone";

/// Fixed name of the throwaway clone target, created under the cwd.
pub const CLONE_TEST_DIR: &str = "git-probe-clone-test";

const GIT_PROGRAM: &str = "git";
const CLONE_TIMEOUT: Duration = Duration::from_secs(60);

/// Clone a repository into a throwaway directory under `base_dir`.
///
/// Any pre-existing target directory is removed first. On success the
/// target is removed again; on failure it is left in place so the partial
/// state can be inspected.
pub fn clone_repository(url: &str, base_dir: &Path) -> CheckRecord {
    clone_with(GIT_PROGRAM, url, &base_dir.join(CLONE_TEST_DIR))
}

/// Variant parameterized over the git program path, for tests.
pub(crate) fn clone_with(git: &str, url: &str, target: &Path) -> CheckRecord {
    if target.exists() {
        if let Err(e) = fs::remove_dir_all(target) {
            return CheckRecord::fail(
                CHECK_NAME,
                format!("cannot clear old test directory {}: {e}", target.display()),
            );
        }
    }

    let target_str = target.to_string_lossy();
    match run_with_timeout(
        git,
        &["clone", url, &target_str],
        None,
        CLONE_TIMEOUT,
    ) {
        Ok(result) if result.success => {
            let _ = fs::remove_dir_all(target);
            CheckRecord::pass(CHECK_NAME, "repository cloned successfully")
        }
        Ok(result) => {
            let stderr = result.stderr.trim();
            let detail = if stderr.is_empty() {
                result.stdout.trim().to_string()
            } else {
                stderr.to_string()
            };
            CheckRecord::fail(CHECK_NAME, format!("clone failed: {detail}"))
        }
        Err(GitprobeError::CommandTimedOut { seconds, .. }) => {
            CheckRecord::fail(CHECK_NAME, format!("clone timed out after {seconds}s"))
        }
        Err(e) => CheckRecord::fail(CHECK_NAME, format!("clone could not run: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Status;

    #[cfg(unix)]
    mod fake_git {
        use super::*;
        use std::path::PathBuf;
        use tempfile::TempDir;

        /// Write a fake git script and return its path.
        fn create_fake_git(dir: &Path, script: &str) -> PathBuf {
            let path = dir.join("git");
            fs::write(&path, format!("#!/bin/sh\n{script}\n")).unwrap();
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
            path
        }

        #[test]
        fn successful_clone_passes_and_cleans_up() {
            let temp = TempDir::new().unwrap();
            // $3 is the clone target ("clone <url> <target>").
            let git = create_fake_git(temp.path(), r#"mkdir -p "$3"; exit 0"#);
            let target = temp.path().join(CLONE_TEST_DIR);

            let record = clone_with(
                git.to_str().unwrap(),
                "https://example.com/repo.git",
                &target,
            );

            assert_eq!(record.status, Status::Pass);
            assert!(!target.exists(), "target should be removed after success");
        }

        #[test]
        fn failing_clone_reports_stderr_and_leaves_target() {
            let temp = TempDir::new().unwrap();
            let git = create_fake_git(
                temp.path(),
                r#"mkdir -p "$3"; echo "fatal: repository not found" >&2; exit 128"#,
            );
            let target = temp.path().join(CLONE_TEST_DIR);

            let record = clone_with(
                git.to_str().unwrap(),
                "https://example.com/missing.git",
                &target,
            );

            assert_eq!(record.status, Status::Fail);
            assert!(record.message.contains("fatal: repository not found"));
            assert!(target.exists(), "target is left behind on failure");
        }

        #[test]
        fn failing_clone_falls_back_to_stdout() {
            let temp = TempDir::new().unwrap();
            let git = create_fake_git(temp.path(), r#"echo "nothing on stderr"; exit 1"#);
            let target = temp.path().join(CLONE_TEST_DIR);

            let record = clone_with(git.to_str().unwrap(), "url", &target);
            assert_eq!(record.status, Status::Fail);
            assert!(record.message.contains("nothing on stderr"));
        }

        #[test]
        fn preexisting_target_is_removed_first() {
            let temp = TempDir::new().unwrap();
            let git = create_fake_git(
                temp.path(),
                // Refuse to clone into an existing directory, like real git.
                r#"[ -e "$3" ] && { echo "fatal: destination path exists" >&2; exit 128; }; mkdir -p "$3"; exit 0"#,
            );
            let target = temp.path().join(CLONE_TEST_DIR);
            fs::create_dir_all(target.join("leftover")).unwrap();

            let record = clone_with(git.to_str().unwrap(), "url", &target);
            assert_eq!(record.status, Status::Pass);
        }
    }

    #[test]
    fn missing_git_fails_without_panicking() {
        let temp = tempfile::TempDir::new().unwrap();
        let record = clone_with(
            "this-command-does-not-exist-12345",
            "https://example.com/repo.git",
            &temp.path().join(CLONE_TEST_DIR),
        );
        assert_eq!(record.status, Status::Fail);
        assert!(record.message.contains("clone could not run"));
    }
}
