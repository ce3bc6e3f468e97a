//! Inflated loose object, split into header and payload
//!
//! ## Format
//!
//! `<kind> <decimal-size>\0<payload>`
//!
//! The declared size is kept for display only, the payload is everything
//! after the first NUL.

use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectKind;
use crate::errors::{Error, Result};
use bytes::Bytes;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawObject {
    kind: ObjectKind,
    declared_size: String,
    payload: Bytes,
}

impl RawObject {
    /// Split an inflated buffer at its first NUL
    ///
    /// `oid` is only used to name the object in errors.
    pub fn parse(oid: &ObjectId, inflated: Bytes) -> Result<Self> {
        let nul = inflated
            .iter()
            .position(|&byte| byte == b'\0')
            .ok_or_else(|| Error::MalformedHeader(oid.clone()))?;

        let header = String::from_utf8_lossy(&inflated[..nul]);
        let (kind, declared_size) = header
            .split_once(' ')
            .ok_or_else(|| Error::MalformedHeader(oid.clone()))?;

        Ok(RawObject {
            kind: ObjectKind::from(kind),
            declared_size: declared_size.to_string(),
            payload: inflated.slice(nul + 1..),
        })
    }

    pub fn kind(&self) -> &ObjectKind {
        &self.kind
    }

    /// Size recorded in the header, as written
    pub fn declared_size(&self) -> &str {
        &self.declared_size
    }

    pub fn payload(&self) -> &Bytes {
        &self.payload
    }

    /// Fail with `UnexpectedKind` unless the object is of `expected` kind
    pub fn expect_kind(self, oid: &ObjectId, expected: ObjectKind) -> Result<Self> {
        if self.kind == expected {
            Ok(self)
        } else {
            Err(Error::UnexpectedKind {
                oid: oid.clone(),
                expected,
                actual: self.kind,
            })
        }
    }
}
