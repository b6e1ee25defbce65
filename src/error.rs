//! Error types for release-log modules using thiserror.

use thiserror::Error;

/// Errors raised while validating parse options.
///
/// Parsing itself never fails; these only surface at the configuration
/// boundary, before any log text is scanned.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid {option} pattern '{pattern}': {source}")]
    InvalidPattern {
        option: &'static str,
        pattern: String,
        #[source]
        source: regex_lite::Error,
    },

    #[error("Meaning name at position {index} is empty")]
    EmptyMeaningName { index: usize },

    #[error("Meaning name '{name}' is reserved for a built-in record field")]
    ReservedMeaningName { name: String },

    #[error("Meaning names were given but no title pattern is configured")]
    MeaningWithoutPattern,

    #[error("Invalid parse configuration: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("Failed to read configuration file: {0}")]
    ReadFailed(#[source] std::io::Error),
}

/// Errors from running the external git command.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("git executable not found in PATH")]
    NotInstalled,

    #[error("Failed to spawn git process: {0}")]
    SpawnFailed(#[source] std::io::Error),

    #[error("git log exited with code {code}: {stderr}")]
    ExternalCommandFailed { code: i32, stderr: String },

    #[error("git log timed out after {0} seconds")]
    Timeout(u64),
}
