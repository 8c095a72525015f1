//! Gitprobe - Git connectivity diagnostics.
//!
//! Gitprobe runs a fixed sequence of independent checks — network, DNS,
//! HTTPS, git installation and config, proxy environment, and an optional
//! end-to-end clone — then prints a report of failures and remedies. No
//! check outcome aborts the run and the process always exits 0; the report
//! is the only output channel.
//!
//! # Modules
//!
//! - [`checks`] - The individual diagnostic checks
//! - [`cli`] - Command-line argument parsing
//! - [`error`] - Error types and result aliases
//! - [`record`] - Check records and the status vocabulary
//! - [`report`] - Final report rendering
//! - [`runner`] - Check orchestration and the record log
//! - [`shell`] - Child process execution with deadlines
//! - [`ui`] - Terminal theme and color handling

pub mod checks;
pub mod cli;
pub mod error;
pub mod record;
pub mod report;
pub mod runner;
pub mod shell;
pub mod ui;

pub use error::{GitprobeError, Result};
