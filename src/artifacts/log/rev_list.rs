use crate::areas::database::Database;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::Tree;
use crate::errors::{Error, Result};
use std::collections::HashSet;

/// Limits applied to a history walk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkOptions {
    /// Stop after this many commits; `None` walks to the root commit
    pub max_depth: Option<usize>,
}

/// One commit of a first-parent walk together with its root tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryStep {
    pub oid: ObjectId,
    pub commit: Commit,
    pub tree: Tree,
}

/// Lazy first-parent walk from a start commit back to the root commit
///
/// The walk yields newest to oldest. The first error is yielded once and
/// ends the iteration. A commit seen twice means the parent chain loops, which
/// is reported as `HistoryCycle` instead of walking forever.
pub struct RevList<'r> {
    database: &'r Database,
    current_commit_oid: Option<ObjectId>,
    visited: HashSet<ObjectId>,
    options: WalkOptions,
}

impl<'r> RevList<'r> {
    pub fn new(database: &'r Database, start: ObjectId, options: WalkOptions) -> Self {
        RevList {
            database,
            current_commit_oid: Some(start),
            visited: HashSet::new(),
            options,
        }
    }

    fn step(&mut self, commit_oid: ObjectId) -> Result<HistoryStep> {
        if !self.visited.insert(commit_oid.clone()) {
            return Err(Error::HistoryCycle(commit_oid));
        }

        let commit = self.database.read_commit(&commit_oid)?;
        let tree_oid = commit
            .tree_oid()
            .ok_or_else(|| Error::MissingTree(commit_oid.clone()))?;
        let tree = self.database.read_tree(tree_oid)?;

        // Move to the first parent for the next iteration
        self.current_commit_oid = commit.parent().cloned();

        tracing::debug!(
            oid = %commit_oid,
            depth = self.visited.len(),
            entries = tree.len(),
            "walked commit"
        );

        Ok(HistoryStep {
            oid: commit_oid,
            commit,
            tree,
        })
    }
}

impl Iterator for RevList<'_> {
    type Item = Result<HistoryStep>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(max_depth) = self.options.max_depth
            && self.visited.len() >= max_depth
        {
            if self.current_commit_oid.take().is_some() {
                tracing::info!(max_depth, "history walk stopped at maximum depth");
            }
            return None;
        }

        // taking the oid leaves the walk finished unless `step` succeeds
        let commit_oid = self.current_commit_oid.take()?;
        Some(self.step(commit_oid))
    }
}

impl std::iter::FusedIterator for RevList<'_> {}
