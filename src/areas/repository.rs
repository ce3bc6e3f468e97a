use crate::areas::database::Database;
use crate::areas::refs::Refs;
use crate::artifacts::log::rev_list::{RevList, WalkOptions};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Error, Result};
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// Name of the store directory inside a working tree
pub const GIT_DIR: &str = ".git";

/// A repository opened for reading, plus the writer commands render to
pub struct Repository {
    writer: RefCell<Box<dyn std::io::Write>>,
    database: Database,
    refs: Refs,
}

impl Repository {
    /// Open the repository whose working tree is at `path`
    ///
    /// Fails with `NotAStoreDirectory` unless `path/.git` is a directory.
    pub fn open(path: &Path, writer: Box<dyn std::io::Write>) -> Result<Self> {
        let git_path = path.join(GIT_DIR);
        if !git_path.is_dir() {
            return Err(Error::NotAStoreDirectory(path.to_path_buf()));
        }

        let database = Database::new(git_path.join("objects").into_boxed_path());
        let refs = Refs::new(git_path.into_boxed_path());

        Ok(Repository {
            writer: RefCell::new(writer),
            database,
            refs,
        })
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    /// First-parent history starting at `start`
    pub fn rev_list(&self, start: ObjectId, options: WalkOptions) -> RevList<'_> {
        RevList::new(&self.database, start, options)
    }
}
