//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::path::Path;

use git2::{Oid, Repository, Signature};

/// Header values written for each entry built by [`log_entry`].
pub const AUTHOR_NAME: &str = "Jane";
pub const AUTHOR_EMAIL: &str = "jane@x.com";
pub const DATE: &str = "Mon";

/// Render one log entry the way `git log --format=<LOG_FORMAT>` prints it.
///
/// Body lines get the one-column pad added by `%w(80,1,1)`.
pub fn log_entry(sha1: &str, title: &str, body: &[&str]) -> String {
    let mut lines = vec![
        "___".to_string(),
        format!("sha1:{}", sha1),
        format!("authorName:{}", AUTHOR_NAME),
        format!("authorEmail:{}", AUTHOR_EMAIL),
        format!("authorDate:{}", DATE),
        format!("committerName:{}", AUTHOR_NAME),
        format!("committerEmail:{}", AUTHOR_EMAIL),
        format!("committerDate:{}", DATE),
        format!("title:{}", title),
    ];
    lines.extend(body.iter().map(|line| format!(" {}", line)));
    lines.join("\n")
}

/// Join entries into one log blob.
pub fn log_blob(entries: &[String]) -> String {
    entries.join("\n")
}

/// A test git repository builder for integration tests.
pub struct TestRepo {
    pub dir: tempfile::TempDir,
    pub repo: Repository,
}

impl TestRepo {
    /// Create a new empty git repository in a temp directory.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let repo = Repository::init(dir.path()).expect("Failed to init git repo");
        Self { dir, repo }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Get the test signature for commits.
    fn signature(&self) -> Signature<'_> {
        Signature::now("Test User", "test@example.com").expect("Failed to create signature")
    }

    /// Create a commit with the given message. Returns the commit OID.
    pub fn commit(&self, message: &str) -> Oid {
        let sig = self.signature();

        let file_path = self.dir.path().join("test.txt");
        std::fs::write(&file_path, message).expect("Failed to write test file");

        let mut index = self.repo.index().expect("Failed to get index");
        index.add_path(Path::new("test.txt")).expect("Failed to add file");
        index.write().expect("Failed to write index");
        let tree_id = index.write_tree().expect("Failed to write tree");
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");

        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("Failed to create commit")
    }

    /// Create a lightweight tag pointing to the given OID.
    pub fn tag_lightweight(&self, name: &str, oid: Oid) {
        let obj = self.repo.find_object(oid, None).expect("Failed to find object");
        self.repo
            .tag_lightweight(name, &obj, false)
            .expect("Failed to create lightweight tag");
    }
}
