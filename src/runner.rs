//! Diagnostic orchestration.
//!
//! [`DiagnosticRunner`] owns the ordered record log. Checks run strictly
//! one after another; each record is printed the moment it is appended, so
//! the user sees progress even when a later check blocks on its timeout.

use std::path::PathBuf;

use crate::checks;
use crate::record::CheckRecord;
use crate::report;
use crate::ui::Theme;

/// Runs the checks in fixed order and collects their records.
pub struct DiagnosticRunner {
    records: Vec<CheckRecord>,
    theme: Theme,
}

impl DiagnosticRunner {
    /// Create a runner with an empty log.
    pub fn new(theme: Theme) -> Self {
        Self {
            records: Vec::new(),
            theme,
        }
    }

    /// The record log, in execution order.
    pub fn records(&self) -> &[CheckRecord] {
        &self.records
    }

    /// Append a record and print its status line immediately.
    pub fn record(&mut self, record: CheckRecord) {
        println!(
            "{} [{}] {}",
            record.status.styled(&self.theme),
            record.name,
            record.message
        );
        if let Some(solution) = &record.solution {
            println!("  {}", self.theme.hint.apply_to(format!("↪ {solution}")));
        }
        println!();
        self.records.push(record);
    }

    fn record_all(&mut self, records: Vec<CheckRecord>) {
        for record in records {
            self.record(record);
        }
    }

    /// Run the full diagnostic sequence and print the report.
    ///
    /// The five unconditional checks always run, in order; the clone check
    /// runs only when `repo_url` is given. No check outcome stops the run.
    pub fn run(&mut self, hostname: &str, repo_url: Option<&str>) {
        println!(
            "{}",
            self.theme.header.apply_to("Running Git connectivity diagnostics...")
        );
        println!();

        self.record(checks::network_reachability());
        self.record(checks::dns_resolution(hostname));
        self.record(checks::https_reachability());
        self.record_all(checks::tool_and_config());
        self.record_all(checks::proxy_environment());

        if let Some(url) = repo_url {
            println!("{}", self.theme.dim.apply_to(format!("cloning {url} ...")));
            let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            self.record(checks::clone_repository(url, &cwd));
        }

        print!("{}", report::render(&self.records, &self.theme));
    }
}
