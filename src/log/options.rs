//! Parse options and their serializable configuration form.

use std::path::Path;

use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;

use super::record::RESERVED_FIELD_NAMES;

/// Compiled options consumed by the stream parser.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Only commits whose title matches are kept.
    pub grep: Option<Regex>,
    /// Pattern used to decompose the title into named groups.
    pub title_pattern: Option<Regex>,
    /// Names bound positionally to `title_pattern` capture groups.
    pub meaning: Vec<String>,
}

impl ParseOptions {
    /// Compile and validate options from their string form.
    pub fn new(
        grep: Option<&str>,
        title_pattern: Option<&str>,
        meaning: Vec<String>,
    ) -> Result<Self, ConfigError> {
        let grep = grep.map(|p| compile("grep", p)).transpose()?;
        let title_pattern = title_pattern.map(|p| compile("title", p)).transpose()?;

        if let Some(index) = meaning.iter().position(|name| name.trim().is_empty()) {
            return Err(ConfigError::EmptyMeaningName { index });
        }
        if let Some(name) = meaning
            .iter()
            .find(|name| RESERVED_FIELD_NAMES.contains(&name.as_str()))
        {
            return Err(ConfigError::ReservedMeaningName { name: name.clone() });
        }
        if !meaning.is_empty() && title_pattern.is_none() {
            return Err(ConfigError::MeaningWithoutPattern);
        }

        Ok(Self {
            grep,
            title_pattern,
            meaning,
        })
    }

    /// Options that keep every commit and leave titles untouched.
    pub fn include_all() -> Self {
        Self::default()
    }
}

fn compile(option: &'static str, pattern: &str) -> Result<Regex, ConfigError> {
    Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern {
        option,
        pattern: pattern.to_string(),
        source,
    })
}

/// Serializable parse configuration, e.g. loaded from a JSON file.
///
/// ```json
/// { "grep": "^(feat|fix)", "title": "^(\\w+): (.*)$", "meaning": ["type", "subject"] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParseConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grep: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub meaning: Vec<String>,
}

impl ParseConfig {
    /// Decode a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(ConfigError::InvalidJson)
    }

    /// Read and decode a JSON configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!("Loading parse configuration from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFailed)?;
        Self::from_json(&content)
    }

    /// Compile into parser options.
    pub fn compile(&self) -> Result<ParseOptions, ConfigError> {
        ParseOptions::new(
            self.grep.as_deref(),
            self.title.as_deref(),
            self.meaning.clone(),
        )
    }
}
