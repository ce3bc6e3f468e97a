//! Git commit object
//!
//! Commits represent snapshots of the repository at specific points in time.
//! They contain:
//! - A tree object ID (directory snapshot)
//! - Parent commit ID(s) (for history)
//! - Author and committer information
//! - Commit message
//!
//! ## Format
//!
//! On disk:
//! ```text
//! commit <size>\0
//! tree <tree-sha>
//! parent <parent-sha>
//! author <name> <email> <timestamp> <timezone>
//! committer <name> <email> <timestamp> <timezone>
//!
//! <commit message>
//! ```
//!
//! Decoding is lenient: unknown header lines (`gpgsig`, `encoding`, ...) are
//! skipped, and missing fields stay empty instead of failing.

use crate::artifacts::objects::object_id::ObjectId;
use regex::Regex;
use std::sync::LazyLock;

/// `Name <email>` at the start of an author or committer line
const IDENTITY_REGEX: &str = r"^[^<>]*<[^<>]*>";

static IDENTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(IDENTITY_REGEX).expect("identity regex is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HeaderField {
    Tree,
    Parent,
    Author,
    Committer,
}

const HEADER_FIELDS: phf::Map<&'static str, HeaderField> = phf::phf_map! {
    "tree" => HeaderField::Tree,
    "parent" => HeaderField::Parent,
    "author" => HeaderField::Author,
    "committer" => HeaderField::Committer,
};

/// Git commit object
///
/// `parents[0]` is the first parent, the one followed by history walks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Commit {
    tree_oid: Option<ObjectId>,
    parents: Vec<ObjectId>,
    author: String,
    committer: String,
    message: String,
}

impl Commit {
    /// Decode a commit payload (the bytes after the object header)
    ///
    /// Invalid UTF-8 is replaced rather than rejected, legacy commits may use
    /// other encodings.
    pub fn decode(payload: &[u8]) -> Self {
        let content = String::from_utf8_lossy(payload);
        let content: &str = &content;
        let (headers, message) = content.split_once("\n\n").unwrap_or((content, ""));

        let mut commit = Commit {
            message: message.trim().to_string(),
            ..Default::default()
        };

        for line in headers.lines() {
            let Some((key, value)) = line.split_once(' ') else {
                continue;
            };
            match HEADER_FIELDS.get(key) {
                Some(HeaderField::Tree) => commit.tree_oid = Some(ObjectId::from(value)),
                Some(HeaderField::Parent) => commit.parents.push(ObjectId::from(value)),
                Some(HeaderField::Author) => commit.author = Self::identity(value),
                Some(HeaderField::Committer) => commit.committer = Self::identity(value),
                None => {}
            }
        }

        tracing::trace!(
            tree = ?commit.tree_oid,
            parents = commit.parents.len(),
            "decoded commit"
        );

        commit
    }

    /// Strip the timestamp and timezone from `Name <email> 1700000000 +0000`
    fn identity(value: &str) -> String {
        IDENTITY
            .find(value)
            .map(|identity| identity.as_str())
            .unwrap_or(value)
            .to_string()
    }

    /// Tree object ID, absent when the payload had no `tree` line
    pub fn tree_oid(&self) -> Option<&ObjectId> {
        self.tree_oid.as_ref()
    }

    pub fn parents(&self) -> &[ObjectId] {
        &self.parents
    }

    /// First parent, `None` for a root commit
    pub fn parent(&self) -> Option<&ObjectId> {
        self.parents.first()
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn committer(&self) -> &str {
        &self.committer
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// First line of the commit message
    pub fn short_message(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }
}
