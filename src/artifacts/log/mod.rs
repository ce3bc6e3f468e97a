//! Commit history traversal
//!
//! - `rev_list`: first-parent walk yielding each commit with its tree
//!
//! Merge parents other than the first are never followed.

pub mod rev_list;
