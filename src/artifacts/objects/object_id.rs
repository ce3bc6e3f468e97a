//! Git object identifier (SHA-1 hash)
//!
//! Object IDs are 40-character hexadecimal strings naming an object by the hash
//! of its uncompressed content.
//!
//! ## Storage
//!
//! Objects are stored in `.git/objects/<first-2-chars>/<remaining-38-chars>`

use crate::artifacts::objects::RAW_OBJECT_ID_LENGTH;
use crate::errors::{Error, Result};
use std::path::PathBuf;

/// Git object identifier (SHA-1 hash)
///
/// The identifier is kept as read from the store: hashes taken from commit
/// headers or ref files are not re-validated, a malformed one simply fails to
/// resolve when looked up.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Build an object ID from the 20 raw hash bytes found in tree entries
    pub fn from_raw(raw: &[u8; RAW_OBJECT_ID_LENGTH]) -> Self {
        Self(hex::encode(raw))
    }

    /// Convert back to the 20 raw hash bytes
    ///
    /// Used when re-encoding tree entries. Fails with `InvalidObjectId` unless
    /// the id is exactly 40 hex digits.
    pub fn to_raw(&self) -> Result<[u8; RAW_OBJECT_ID_LENGTH]> {
        let mut raw = [0u8; RAW_OBJECT_ID_LENGTH];
        hex::decode_to_slice(&self.0, &mut raw)
            .map_err(|_| Error::InvalidObjectId(self.clone()))?;
        Ok(raw)
    }

    /// Convert to file system path for object storage
    ///
    /// Splits the hash as `XX/YYYYYY...` where XX is the first 2 chars.
    /// Returns `None` when the id is too short to be split that way.
    pub fn to_path(&self) -> Option<PathBuf> {
        let dir = self.0.get(..2)?;
        let file = self.0.get(2..).filter(|file| !file.is_empty())?;
        Some(PathBuf::from(dir).join(file))
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ObjectId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
