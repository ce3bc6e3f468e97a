//! Git data structures and algorithms
//!
//! - `branch`: Branch names and branch refs
//! - `log`: Commit history traversal
//! - `objects`: Git object types (commit, tree) and their decoders

pub mod branch;
pub mod log;
pub mod objects;
