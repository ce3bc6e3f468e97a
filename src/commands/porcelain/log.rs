use crate::areas::repository::Repository;
use crate::artifacts::log::rev_list::{HistoryStep, WalkOptions};
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::tree::Tree;
use anyhow::Context;
use colored::Colorize;

#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    pub max_depth: Option<usize>,
}

impl Repository {
    /// Show the tip commit of `branch_name`, its tree, and the tree of every
    /// commit on its first-parent history
    ///
    /// The whole history is decoded before anything is written, so a broken
    /// object produces an error and no output.
    pub fn log(&self, branch_name: &str, opts: &LogOptions) -> anyhow::Result<()> {
        let branch = self.refs().read_branch(branch_name)?;

        let walk_options = WalkOptions {
            max_depth: opts.max_depth,
        };
        let history = self
            .rev_list(branch.target().clone(), walk_options)
            .collect::<Result<Vec<HistoryStep>, _>>()
            .with_context(|| format!("unable to walk history of branch {}", branch.name()))?;

        let Some(tip) = history.first() else {
            return Ok(());
        };

        self.show_commit(&tip.commit)?;
        writeln!(self.writer())?;
        self.show_tree(&tip.tree)?;

        for step in &history {
            writeln!(self.writer())?;
            writeln!(
                self.writer(),
                "{}",
                format!("commit {}", step.oid).yellow()
            )?;
            self.show_tree(&step.tree)?;
        }

        Ok(())
    }

    fn show_commit(&self, commit: &Commit) -> anyhow::Result<()> {
        if let Some(tree_oid) = commit.tree_oid() {
            writeln!(self.writer(), "tree {tree_oid}")?;
        }
        for parent in commit.parents() {
            writeln!(self.writer(), "parent {parent}")?;
        }
        writeln!(self.writer(), "author {}", commit.author())?;
        writeln!(self.writer(), "committer {}", commit.committer())?;
        writeln!(self.writer())?;
        writeln!(self.writer(), "{}", commit.message())?;

        Ok(())
    }

    fn show_tree(&self, tree: &Tree) -> anyhow::Result<()> {
        for entry in tree.entries() {
            writeln!(
                self.writer(),
                "{} {}    {}",
                entry.entry_type(),
                entry.oid(),
                entry.filename()
            )?;
        }

        Ok(())
    }
}
