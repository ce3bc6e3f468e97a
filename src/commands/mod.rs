//! Command implementations
//!
//! Commands are `impl Repository` blocks that decode through the areas and
//! render plain text to the repository's writer.

pub mod porcelain;
