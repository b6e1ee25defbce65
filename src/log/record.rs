//! Structured commit record produced by the stream parser.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Serialized keys owned by typed fields that are not header names.
/// Extension fields may not use them, or the flattened map would emit a
/// duplicate key.
pub const RESERVED_FIELD_NAMES: [&str; 1] = ["messageLines"];

/// One commit reconstructed from `git log` output.
///
/// Header fields the log format always emits are typed; anything else,
/// including fields extracted from the title, lives in `fields`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitRecord {
    pub sha1: String,
    pub author_name: String,
    pub author_email: String,
    /// Raw date string as printed by git (`%aD`).
    pub author_date: String,
    pub committer_name: String,
    pub committer_email: String,
    /// Raw date string as printed by git (`%cD`).
    pub committer_date: String,
    pub title: String,
    pub message_lines: Vec<String>,
    #[serde(flatten)]
    pub fields: BTreeMap<String, String>,
}

impl CommitRecord {
    /// An empty record, as started by an accepted sentinel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field by its log name. Known header names write the typed
    /// field, reserved names are dropped, any other name goes to `fields`.
    /// Last write wins.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match name {
            "sha1" => self.sha1 = value,
            "authorName" => self.author_name = value,
            "authorEmail" => self.author_email = value,
            "authorDate" => self.author_date = value,
            "committerName" => self.committer_name = value,
            "committerEmail" => self.committer_email = value,
            "committerDate" => self.committer_date = value,
            "title" => self.title = value,
            _ if RESERVED_FIELD_NAMES.contains(&name) => {
                debug!("Ignoring reserved field name '{}'", name);
            }
            _ => {
                self.fields.insert(name.to_string(), value);
            }
        }
    }

    /// Look up a field by its log name.
    pub fn get(&self, name: &str) -> Option<&str> {
        let value = match name {
            "sha1" => &self.sha1,
            "authorName" => &self.author_name,
            "authorEmail" => &self.author_email,
            "authorDate" => &self.author_date,
            "committerName" => &self.committer_name,
            "committerEmail" => &self.committer_email,
            "committerDate" => &self.committer_date,
            "title" => &self.title,
            _ => return self.fields.get(name).map(String::as_str),
        };
        Some(value.as_str())
    }

    /// The body joined back into a single string.
    pub fn message(&self) -> String {
        self.message_lines.join("\n")
    }

    /// Returns the short hash (first 7 characters).
    pub fn short_sha(&self) -> &str {
        self.sha1
            .char_indices()
            .nth(7)
            .map_or(self.sha1.as_str(), |(idx, _)| &self.sha1[..idx])
    }

    /// Author date parsed as RFC 2822, if it is one.
    pub fn author_datetime(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc2822(&self.author_date).ok()
    }

    /// Committer date parsed as RFC 2822, if it is one.
    pub fn committer_datetime(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc2822(&self.committer_date).ok()
    }
}
