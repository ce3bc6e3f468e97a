//! Error type for store inspection
//!
//! Every failure is fatal for the operation that hit it: decoding is
//! deterministic over the on-disk state, so nothing here is retried.

use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectKind;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("not a git repository (no .git directory at {0})")]
    NotAStoreDirectory(PathBuf),

    #[error("branch not found: {0}")]
    RefNotFound(String),

    #[error("invalid branch name: {0}")]
    InvalidBranchName(String),

    #[error("invalid object id: {0}")]
    InvalidObjectId(ObjectId),

    #[error("object not found: {0}")]
    ObjectNotFound(ObjectId),

    #[error("corrupt object {0}: unable to decompress")]
    CorruptObject(ObjectId),

    #[error("malformed object header in {0}")]
    MalformedHeader(ObjectId),

    #[error("object {oid} is a {actual}, expected a {expected}")]
    UnexpectedKind {
        oid: ObjectId,
        expected: ObjectKind,
        actual: ObjectKind,
    },

    #[error("commit {0} has no tree")]
    MissingTree(ObjectId),

    #[error("tree entry truncated at byte {offset}")]
    TruncatedTreeEntry { offset: usize },

    #[error("commit {0} is its own ancestor")]
    HistoryCycle(ObjectId),

    #[error("io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
