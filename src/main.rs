//! release-log - CLI entry point.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use release_log::git::{GitCli, LogOptions, check_git_installed, fetch_commits};
use release_log::{ConfigError, ParseConfig, ParseOptions};

/// Extract structured commit records from git history.
#[derive(Parser, Debug)]
#[command(name = "release-log")]
#[command(about = "Extract structured commit records from git history")]
#[command(version)]
struct Cli {
    /// Revision range to read (e.g. v1.0.0..HEAD)
    #[arg(long)]
    range: Option<String>,

    /// Only read branches matching this pattern
    #[arg(short, long)]
    branch: Option<String>,

    /// List merge commits only (default lists non-merge commits only)
    #[arg(long)]
    merge_commits: bool,

    /// Repository directory (defaults to current directory)
    #[arg(long)]
    cwd: Option<PathBuf>,

    /// Keep only commits whose title matches this regular expression
    #[arg(short, long)]
    grep: Option<String>,

    /// Regular expression splitting the title into capture groups
    #[arg(short, long)]
    title: Option<String>,

    /// Name for each title capture group, in order (repeatable)
    #[arg(short, long = "meaning")]
    meaning: Vec<String>,

    /// JSON file with grep/title/meaning defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print JSON on a single line
    #[arg(long)]
    compact: bool,
}

impl Cli {
    /// Merge the optional config file with flags; flags win.
    fn parse_options(&self) -> Result<ParseOptions, ConfigError> {
        let mut config = match &self.config {
            Some(path) => ParseConfig::load(path)?,
            None => ParseConfig::default(),
        };

        if self.grep.is_some() {
            config.grep = self.grep.clone();
        }
        if self.title.is_some() {
            config.title = self.title.clone();
        }
        if !self.meaning.is_empty() {
            config.meaning = self.meaning.clone();
        }

        config.compile()
    }

    fn log_options(&self) -> LogOptions {
        LogOptions {
            range: self.range.clone(),
            branch: self.branch.clone(),
            merge_commits: self.merge_commits,
            cwd: self.cwd.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let parse_options = cli
        .parse_options()
        .context("Invalid parse options")?;

    check_git_installed().context("git is required")?;

    let commits = fetch_commits(&GitCli, &cli.log_options(), &parse_options)
        .await
        .context("Failed to read git history")?;

    let json = if cli.compact {
        serde_json::to_string(&commits)
    } else {
        serde_json::to_string_pretty(&commits)
    }
    .context("Failed to serialize commits")?;

    println!("{}", json);

    Ok(())
}

/// Console logging to stderr, controlled by RUST_LOG (default: warn).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
