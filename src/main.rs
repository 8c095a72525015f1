//! Gitprobe CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use gitprobe::cli::{Cli, DEFAULT_REPO_URL};
use gitprobe::runner::DiagnosticRunner;
use gitprobe::ui::{should_use_colors, Theme};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("gitprobe=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gitprobe=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("gitprobe starting with args: {:?}", cli);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let theme = if should_use_colors() {
        Theme::new()
    } else {
        Theme::plain()
    };

    let repo_url = if cli.skip_clone {
        None
    } else {
        Some(
            cli.repo_url
                .clone()
                .unwrap_or_else(|| DEFAULT_REPO_URL.to_string()),
        )
    };

    let mut runner = DiagnosticRunner::new(theme);
    runner.run(&cli.host, repo_url.as_deref());

    // Diagnostics are advisory: failed checks are the report's concern,
    // not the exit code's.
    ExitCode::SUCCESS
}
