//! Core repository components
//!
//! - `database`: Loose object database (read-only)
//! - `refs`: Branch references under `refs/heads`
//! - `repository`: Opens a repository and ties the other areas together

pub mod database;
pub mod refs;
pub mod repository;
