//! Commit stream parsing: turns flattened `git log` output into records.

pub mod line;
pub mod normalize;
pub mod options;
pub mod parser;
pub mod record;
pub mod title;

pub use line::{RawLine, SENTINEL, classify};
pub use normalize::normalize_newlines;
pub use options::{ParseConfig, ParseOptions};
pub use parser::parse_commit_stream;
pub use record::CommitRecord;
pub use title::decompose_title;
