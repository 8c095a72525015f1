//! CLI argument definitions.

use clap::Parser;

/// Repository cloned by the end-to-end check when no URL is given.
pub const DEFAULT_REPO_URL: &str = "https://github.com/octocat/Hello-World.git";

/// Gitprobe - diagnose Git connectivity problems.
#[derive(Debug, Parser)]
#[command(name = "gitprobe")]
#[command(author, version, long_about = None)]
pub struct Cli {
    /// Repository URL to clone-test (defaults to a public example repository)
    pub repo_url: Option<String>,

    /// Hostname used for the DNS resolution check
    #[arg(long, default_value = "github.com")]
    pub host: String,

    /// Skip the end-to-end clone check
    #[arg(long)]
    pub skip_clone: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
