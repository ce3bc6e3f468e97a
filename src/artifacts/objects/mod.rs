//! Git object types and decoding
//!
//! Git stores all content as objects identified by SHA-1 hashes. Loose objects
//! are zlib-compressed files holding `<type> <size>\0<content>`.
//!
//! - **Commit**: Snapshot with metadata (author, message, parent commits, tree)
//! - **Tree**: Directory listing (names, modes, and object IDs)
//!
//! Blobs and tags are recognised by kind but never decoded.

pub mod commit;
pub mod cursor;
pub mod object_id;
pub mod object_type;
pub mod raw_object;
pub mod tree;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Length of a SHA-1 hash as raw bytes, as stored in tree entries
pub const RAW_OBJECT_ID_LENGTH: usize = 20;
