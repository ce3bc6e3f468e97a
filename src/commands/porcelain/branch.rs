use crate::areas::repository::Repository;

pub const NO_BRANCHES_MESSAGE: &str = "No branches found.";

impl Repository {
    /// Print every branch under `refs/heads`, one per line
    pub fn list_branches(&self) -> anyhow::Result<()> {
        match self.refs().list_branches()? {
            Some(branches) => {
                for branch in branches {
                    writeln!(self.writer(), "{}", branch.name())?;
                }
            }
            None => writeln!(self.writer(), "{NO_BRANCHES_MESSAGE}")?,
        }

        Ok(())
    }
}
