//! Git tree object
//!
//! Trees represent directory snapshots in Git. They contain entries for files (blobs)
//! and subdirectories (other trees), along with their names and modes.
//!
//! ## Format
//!
//! On disk: `tree <size>\0<entries>`
//! Each entry: `<mode> <name>\0<20-byte-sha1>`
//!
//! Entries are kept in the order they appear in the payload.

use crate::artifacts::objects::RAW_OBJECT_ID_LENGTH;
use crate::artifacts::objects::cursor::ByteCursor;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Error, Result};
use bytes::{BufMut, Bytes, BytesMut};

/// Mode written for subdirectories
pub const TREE_MODE: &str = "40000";

/// What a tree entry points at
///
/// Symlinks and submodules are folded into `Blob`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    Tree,
    Blob,
}

impl EntryType {
    pub fn from_mode(mode: &str) -> Self {
        if mode == TREE_MODE {
            EntryType::Tree
        } else {
            EntryType::Blob
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::Tree => "tree",
            EntryType::Blob => "blob",
        }
    }
}

impl std::fmt::Display for EntryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    mode: String,
    filename: String,
    oid: ObjectId,
}

impl TreeEntry {
    pub fn mode(&self) -> &str {
        &self.mode
    }

    pub fn entry_type(&self) -> EntryType {
        EntryType::from_mode(&self.mode)
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn oid(&self) -> &ObjectId {
        &self.oid
    }

    /// Consume one `<mode> <name>\0<hash>` record
    fn decode(cursor: &mut ByteCursor<'_>) -> Result<Self> {
        let offset = cursor.position();
        let truncated = || Error::TruncatedTreeEntry { offset };

        let mode = cursor.scan_until(b' ').ok_or_else(truncated)?;
        let filename = cursor.scan_until(b'\0').ok_or_else(truncated)?;
        let raw_oid: &[u8; RAW_OBJECT_ID_LENGTH] = cursor
            .take(RAW_OBJECT_ID_LENGTH)
            .and_then(|raw| raw.try_into().ok())
            .ok_or_else(truncated)?;

        Ok(TreeEntry {
            mode: String::from_utf8_lossy(mode).into_owned(),
            filename: String::from_utf8_lossy(filename).into_owned(),
            oid: ObjectId::from_raw(raw_oid),
        })
    }

    fn write_to(&self, buffer: &mut BytesMut) -> Result<()> {
        buffer.put_slice(self.mode.as_bytes());
        buffer.put_u8(b' ');
        buffer.put_slice(self.filename.as_bytes());
        buffer.put_u8(b'\0');
        buffer.put_slice(&self.oid.to_raw()?);

        Ok(())
    }
}

/// Git tree object representing a directory snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    entries: Vec<TreeEntry>,
}

impl Tree {
    /// Decode a tree payload (the bytes after the object header)
    ///
    /// An empty payload is a valid, empty tree.
    pub fn decode(payload: &[u8]) -> Result<Self> {
        let mut cursor = ByteCursor::new(payload);
        let mut entries = Vec::new();

        while !cursor.is_at_end() {
            entries.push(TreeEntry::decode(&mut cursor)?);
        }

        tracing::trace!(entries = entries.len(), "decoded tree");

        Ok(Tree { entries })
    }

    /// Re-encode the entries with the on-disk framing, header excluded
    pub fn serialize(&self) -> Result<Bytes> {
        let mut buffer = BytesMut::new();
        for entry in &self.entries {
            entry.write_to(&mut buffer)?;
        }

        Ok(buffer.freeze())
    }

    pub fn entries(&self) -> &[TreeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for Tree {
    type Item = TreeEntry;
    type IntoIter = std::vec::IntoIter<TreeEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
