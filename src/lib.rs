//! Read-only inspector for git loose-object stores
//!
//! - `areas`: the object database, branch refs and the repository handle
//! - `artifacts`: object decoders (commit, tree) and the history walker
//! - `commands`: text rendering used by the `peek` binary
//! - `errors`: the error taxonomy shared by all of the above
//!
//! Only loose objects are read; nothing is ever written to the store.

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
