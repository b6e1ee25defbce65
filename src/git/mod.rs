//! git log invocation for the stream parser.

pub mod format;
pub mod invoke;

pub use format::LOG_FORMAT;
pub use invoke::{
    GitCli, LogOptions, LogSource, check_git_installed, fetch_commits, git_log_args, run_git_log,
};
