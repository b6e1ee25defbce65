//! Per-line classification of the flattened log stream.

use std::sync::LazyLock;

use regex_lite::Regex;

/// Literal line that opens every commit entry.
pub const SENTINEL: &str = "___";

/// `name: value` header line. The identifier may end with a single `1`.
static FIELD_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([a-z]+1?)\s?:\s?(.*)$").expect("field line pattern is valid")
});

/// One classified line of log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawLine<'a> {
    /// The sentinel that starts a new entry.
    New,
    /// A `name: value` metadata line, value trimmed.
    Field { name: &'a str, value: &'a str },
    /// A body line with its one-column pad removed.
    Message(&'a str),
}

/// Classify a single line of normalized log output.
pub fn classify(line: &str) -> RawLine<'_> {
    if line == SENTINEL {
        return RawLine::New;
    }

    if let Some(caps) = FIELD_LINE.captures(line) {
        let name = caps.get(1).map(|m| m.as_str()).unwrap_or("");
        let value = caps.get(2).map(|m| m.as_str()).unwrap_or("").trim();
        return RawLine::Field { name, value };
    }

    RawLine::Message(strip_padding(line))
}

/// Drop the first character, which the log formatter adds as indentation.
fn strip_padding(line: &str) -> &str {
    let mut chars = line.chars();
    chars.next();
    chars.as_str()
}
