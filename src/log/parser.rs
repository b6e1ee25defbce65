//! Line-oriented scanner that rebuilds commit records from log output.

use tracing::{debug, trace};

use super::line::{RawLine, classify};
use super::normalize::normalize_newlines;
use super::options::ParseOptions;
use super::record::CommitRecord;
use super::title::decompose_title;

/// Parse captured `git log` output into commit records.
///
/// Never fails: text without sentinels produces no records, lines outside
/// an accepted entry are dropped, and a non-matching title pattern keeps
/// the raw title. Records come back in the order their sentinels appear.
pub fn parse_commit_stream(text: &str, options: &ParseOptions) -> Vec<CommitRecord> {
    let normalized = normalize_newlines(text);
    let normalized = normalized.trim();
    if normalized.is_empty() {
        return Vec::new();
    }

    let lines: Vec<RawLine<'_>> = normalized.split('\n').map(classify).collect();
    debug!("Iterating on {} lines", lines.len());

    let mut commits: Vec<CommitRecord> = Vec::new();
    // The record being built is always the last one pushed.
    let mut building = false;

    for (index, line) in lines.iter().enumerate() {
        trace!("Parsed line {}: {:?}", index, line);
        match *line {
            RawLine::New => {
                if include_commit(&lines[index + 1..], options) {
                    debug!("New commit at line {}", index);
                    commits.push(CommitRecord::new());
                    building = true;
                } else {
                    debug!("Excluding commit starting at line {}", index);
                    building = false;
                }
            }
            RawLine::Field { name, value } => {
                if let Some(record) = commits.last_mut().filter(|_| building) {
                    apply_field(record, name, value, options);
                }
            }
            RawLine::Message(text) => {
                if let Some(record) = commits.last_mut().filter(|_| building) {
                    record.message_lines.push(text.to_string());
                }
            }
        }
    }

    debug!("Parsed {} commits", commits.len());
    commits
}

fn apply_field(record: &mut CommitRecord, name: &str, value: &str, options: &ParseOptions) {
    if name != "title" {
        record.set_field(name, value);
        return;
    }

    let decomposed = decompose_title(value, options.title_pattern.as_ref(), &options.meaning);
    trace!("Parsed title {:?}", decomposed);
    for (key, extracted) in decomposed {
        record.set_field(&key, extracted);
    }

    if record.title.is_empty() {
        record.title = value.to_string();
    }
}

/// Decide whether the entry whose lines follow a sentinel is kept.
fn include_commit(entry: &[RawLine<'_>], options: &ParseOptions) -> bool {
    let Some(filter) = &options.grep else {
        return true;
    };

    match boundary_title(entry) {
        Some(title) => filter.is_match(title),
        None => false,
    }
}

/// The first `title` value before the next sentinel.
fn boundary_title<'a>(entry: &[RawLine<'a>]) -> Option<&'a str> {
    entry
        .iter()
        .take_while(|line| **line != RawLine::New)
        .find_map(|line| match *line {
            RawLine::Field { name: "title", value } => Some(value),
            _ => None,
        })
}
