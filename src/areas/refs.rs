//! Git branch references
//!
//! Branches are text files under `.git/refs/heads`, each holding the 40-character
//! SHA-1 of the commit at the branch tip. Hierarchical names such as
//! `feature/login` are nested directories.
//!
//! Only direct references are read: symbolic refs and packed-refs are out of
//! scope for this inspector.

use crate::artifacts::branch::branch_name::{Branch, BranchName};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Error, Result};
use derive_new::new;
use std::path::Path;
use walkdir::WalkDir;

/// Read-only view of `.git/refs`
#[derive(Debug, new)]
pub struct Refs {
    /// Path to the git directory (typically `.git`)
    path: Box<Path>,
}

impl Refs {
    /// List every branch under `refs/heads`, sorted by name
    ///
    /// # Returns
    ///
    /// `None` when the `refs/heads` directory does not exist at all
    pub fn list_branches(&self) -> Result<Option<Vec<Branch>>> {
        let heads_path = self.heads_path();
        if !heads_path.is_dir() {
            tracing::debug!(path = %heads_path.display(), "no branch namespace");
            return Ok(None);
        }

        let mut branches = Vec::new();
        for entry in WalkDir::new(&heads_path).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!(error = %e, "skipping unreadable ref entry");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }

            let Ok(relative_path) = entry.path().strip_prefix(&heads_path) else {
                continue;
            };
            let name = relative_path
                .components()
                .map(|component| component.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");

            branches.push(Branch::new(name, Self::read_ref_file(entry.path())?));
        }

        Ok(Some(branches))
    }

    /// Resolve a branch name to the commit it points to
    ///
    /// Fails with `RefNotFound` when no ref file exists; the object database
    /// is never touched.
    pub fn read_branch(&self, branch_name: &str) -> Result<Branch> {
        let branch_name = BranchName::try_parse(branch_name.to_string())?;
        let ref_path = self.heads_path().join(branch_name.as_ref());

        if !ref_path.is_file() {
            return Err(Error::RefNotFound(branch_name.to_string()));
        }

        let target = Self::read_ref_file(&ref_path)?;
        tracing::debug!(branch = %branch_name, %target, "resolved branch");

        Ok(Branch::new(branch_name.to_string(), target))
    }

    fn read_ref_file(path: &Path) -> Result<ObjectId> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let content = content.lines().next().unwrap_or("").trim();

        Ok(ObjectId::from(content))
    }

    pub fn refs_path(&self) -> Box<Path> {
        self.path.join("refs").into_boxed_path()
    }

    pub fn heads_path(&self) -> Box<Path> {
        self.refs_path().join("heads").into_boxed_path()
    }
}
