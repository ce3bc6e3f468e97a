//! Loose object database
//!
//! Reads zlib-compressed objects from `.git/objects/<xx>/<yyyy...>` and splits
//! them into kind and payload. Packfiles are not supported.

use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectKind;
use crate::artifacts::objects::raw_object::RawObject;
use crate::artifacts::objects::tree::Tree;
use crate::errors::{Error, Result};
use bytes::Bytes;
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    /// Read, inflate and split the loose object named by `object_id`
    pub fn read_object(&self, object_id: &ObjectId) -> Result<RawObject> {
        let object_content = self.load(object_id)?;
        let object_content = Self::decompress(object_id, object_content)?;
        let raw = RawObject::parse(object_id, object_content)?;

        tracing::debug!(
            oid = %object_id,
            kind = %raw.kind(),
            size = raw.payload().len(),
            "read object"
        );

        Ok(raw)
    }

    /// Read an object that must be a commit and decode it
    pub fn read_commit(&self, object_id: &ObjectId) -> Result<Commit> {
        let raw = self
            .read_object(object_id)?
            .expect_kind(object_id, ObjectKind::Commit)?;

        Ok(Commit::decode(raw.payload()))
    }

    /// Read an object that must be a tree and decode it
    pub fn read_tree(&self, object_id: &ObjectId) -> Result<Tree> {
        let raw = self
            .read_object(object_id)?
            .expect_kind(object_id, ObjectKind::Tree)?;

        Tree::decode(raw.payload())
    }

    fn load(&self, object_id: &ObjectId) -> Result<Bytes> {
        let object_path = object_id
            .to_path()
            .map(|relative| self.path.join(relative))
            .ok_or_else(|| Error::ObjectNotFound(object_id.clone()))?;

        match std::fs::read(&object_path) {
            Ok(content) => Ok(content.into()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(Error::ObjectNotFound(object_id.clone()))
            }
            Err(e) => Err(Error::io(object_path, e)),
        }
    }

    fn decompress(object_id: &ObjectId, data: Bytes) -> Result<Bytes> {
        let mut decoder = flate2::read::ZlibDecoder::new(&*data);
        let mut decompressed_content = Vec::new();
        decoder
            .read_to_end(&mut decompressed_content)
            .map_err(|e| {
                tracing::debug!(oid = %object_id, error = %e, "inflate failed");
                Error::CorruptObject(object_id.clone())
            })?;

        Ok(decompressed_content.into())
    }
}
