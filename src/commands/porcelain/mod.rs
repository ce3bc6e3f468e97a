//! User-facing commands
//!
//! - `branch`: List branches
//! - `log`: Show a branch tip and the trees along its first-parent history

pub mod branch;
pub mod log;
