//! Child process execution with deadlines.
//!
//! Every external command this tool runs (git version/config queries, the
//! clone test) goes through [`run_with_timeout`] so a wedged binary or a
//! stalled network clone cannot hang the diagnostic run.

use std::io::{BufRead, BufReader};
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use crate::error::{GitprobeError, Result};

/// How often to poll a running child for completion.
const WAIT_POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Result of executing a command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }
}

/// Execute a command, killing it if it runs past the deadline.
///
/// Stdout and stderr are drained on reader threads while the main thread
/// polls for completion; without the drain a chatty child can fill its pipe
/// buffer and deadlock against the deadline loop.
pub fn run_with_timeout(
    program: &str,
    args: &[&str],
    cwd: Option<&Path>,
    timeout: Duration,
) -> Result<CommandResult> {
    let start = Instant::now();
    let rendered = render_command(program, args);
    tracing::debug!("running `{}` (timeout {:?})", rendered, timeout);

    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    if let Some(cwd) = cwd {
        cmd.current_dir(cwd);
    }

    let mut child = cmd.spawn().map_err(|source| GitprobeError::CommandLaunch {
        command: rendered.clone(),
        source,
    })?;

    // Pipes are always requested above, so take() cannot return None.
    let stdout = child.stdout.take().ok_or_else(|| {
        GitprobeError::Other(anyhow::anyhow!("child stdout pipe missing"))
    })?;
    let stderr = child.stderr.take().ok_or_else(|| {
        GitprobeError::Other(anyhow::anyhow!("child stderr pipe missing"))
    })?;

    let stdout_handle = thread::spawn(move || {
        let reader = BufReader::new(stdout);
        let mut output = String::new();
        for line in reader.lines().map_while(std::result::Result::ok) {
            output.push_str(&line);
            output.push('\n');
        }
        output
    });

    let stderr_handle = thread::spawn(move || {
        let reader = BufReader::new(stderr);
        let mut output = String::new();
        for line in reader.lines().map_while(std::result::Result::ok) {
            output.push_str(&line);
            output.push('\n');
        }
        output
    });

    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) => {
                if start.elapsed() >= timeout {
                    let _ = child.kill();
                    let _ = child.wait();
                    tracing::debug!("`{}` killed after deadline", rendered);
                    return Err(GitprobeError::CommandTimedOut {
                        command: rendered,
                        seconds: timeout.as_secs(),
                    });
                }
                thread::sleep(WAIT_POLL_INTERVAL);
            }
            Err(e) => return Err(GitprobeError::Io(e)),
        }
    };

    let stdout_output = stdout_handle.join().unwrap_or_default();
    let stderr_output = stderr_handle.join().unwrap_or_default();
    let duration = start.elapsed();
    tracing::debug!("`{}` exited {:?} in {:?}", rendered, status.code(), duration);

    if status.success() {
        Ok(CommandResult::success(
            stdout_output,
            stderr_output,
            duration,
        ))
    } else {
        Ok(CommandResult::failure(
            status.code(),
            stdout_output,
            stderr_output,
            duration,
        ))
    }
}

/// Render a program + args as a display string for errors and logs.
fn render_command(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}
