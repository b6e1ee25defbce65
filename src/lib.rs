//! release-log - Turn `git log` output into structured commit records.
//!
//! # Overview
//!
//! release-log asks git for a flattened, sentinel-delimited log, then scans
//! it line by line into [`CommitRecord`]s: header fields, the title (split
//! into named parts by a user pattern when configured) and the message body.
//! The records feed a release-notes renderer.

pub mod error;
pub mod git;
pub mod log;

// Re-export commonly used types
pub use error::{ConfigError, GitError};
pub use git::{LogOptions, LogSource};
pub use log::{CommitRecord, ParseConfig, ParseOptions, parse_commit_stream};
