//! Running `git log` and handing its output to the stream parser.
//!
//! The parser never touches processes; this module owns the invocation and
//! reports a non-zero exit to the caller instead of ignoring it or exiting.

use std::env;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::error::GitError;
use crate::log::{CommitRecord, ParseOptions, parse_commit_stream};

use super::format::LOG_FORMAT;

/// Default timeout for the git subprocess (1 minute).
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Environment variable to override the default timeout.
const TIMEOUT_ENV_VAR: &str = "RELEASE_LOG_GIT_TIMEOUT";

/// What to ask `git log` for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogOptions {
    /// Revision range, e.g. `v1.0.0..HEAD`. All history when `None`.
    pub range: Option<String>,
    /// Restrict to branches matching this pattern (`--branches=`).
    pub branch: Option<String>,
    /// List only merge commits instead of only non-merge commits.
    pub merge_commits: bool,
    /// Directory to run git in. Current directory when `None`.
    pub cwd: Option<PathBuf>,
}

/// Arguments passed to `git` for the given options.
pub fn git_log_args(options: &LogOptions) -> Vec<String> {
    let mut args = vec![
        "log".to_string(),
        "--no-color".to_string(),
        if options.merge_commits {
            "--merges".to_string()
        } else {
            "--no-merges".to_string()
        },
    ];

    if let Some(branch) = &options.branch {
        args.push(format!("--branches={}", branch));
    }

    args.push(format!("--format={}", LOG_FORMAT));

    if let Some(range) = &options.range {
        args.push(range.clone());
    }

    args
}

/// Get the configured timeout duration.
///
/// Reads from RELEASE_LOG_GIT_TIMEOUT if set, otherwise 60 seconds.
/// Logs a warning if the variable is set to something unparseable.
fn get_timeout() -> Duration {
    match env::var(TIMEOUT_ENV_VAR) {
        Ok(v) if !v.is_empty() => match v.parse::<u64>() {
            Ok(secs) => Duration::from_secs(secs),
            Err(_) => {
                warn!(
                    "Invalid {} value '{}', using default {}s",
                    TIMEOUT_ENV_VAR, v, DEFAULT_TIMEOUT_SECS
                );
                Duration::from_secs(DEFAULT_TIMEOUT_SECS)
            }
        },
        _ => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
    }
}

/// Check that a `git` executable is on the PATH.
pub fn check_git_installed() -> Result<(), GitError> {
    which::which("git").map(|_| ()).map_err(|_| GitError::NotInstalled)
}

/// Run `git log` and return its raw stdout.
///
/// A non-zero exit becomes `GitError::ExternalCommandFailed` with the exit
/// code (`-1` if git was killed by a signal) and captured stderr.
pub async fn run_git_log(options: &LogOptions) -> Result<String, GitError> {
    let args = git_log_args(options);
    debug!("Spawning git with args {:?}", args);
    run_command("git", &args, options.cwd.as_ref()).await
}

async fn run_command(
    program: &str,
    args: &[String],
    cwd: Option<&PathBuf>,
) -> Result<String, GitError> {
    let timeout_duration = get_timeout();
    let timeout_secs = timeout_duration.as_secs();

    let mut command = Command::new(program);
    command
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);
    if let Some(dir) = cwd {
        command.current_dir(dir);
    }

    let output = timeout(timeout_duration, command.output())
        .await
        .map_err(|_| GitError::Timeout(timeout_secs))?
        .map_err(GitError::SpawnFailed)?;

    let code = output.status.code().unwrap_or(-1);
    debug!("{} exited with code {}", program, code);

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(GitError::ExternalCommandFailed { code, stderr });
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

/// Source of raw log text.
///
/// This abstraction allows replacing the git subprocess in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LogSource: Send + Sync {
    /// Produce the raw log text for the given options.
    async fn read_log(&self, options: &LogOptions) -> Result<String, GitError>;
}

/// Default source that calls the real git CLI.
pub struct GitCli;

#[async_trait]
impl LogSource for GitCli {
    async fn read_log(&self, options: &LogOptions) -> Result<String, GitError> {
        run_git_log(options).await
    }
}

/// Read the log from `source` and parse it into commit records.
pub async fn fetch_commits<S: LogSource + ?Sized>(
    source: &S,
    log_options: &LogOptions,
    parse_options: &ParseOptions,
) -> Result<Vec<CommitRecord>, GitError> {
    let text = source.read_log(log_options).await?;
    Ok(parse_commit_stream(&text, parse_options))
}
