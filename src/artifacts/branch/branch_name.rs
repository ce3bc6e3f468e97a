use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Error, Result};
use derive_new::new;

/// Branch name relative to `refs/heads`, e.g. `feature/login`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct BranchName(String);

impl BranchName {
    /// Validate a user supplied branch name
    ///
    /// Only names that would resolve outside `refs/heads` are rejected: an
    /// empty name, a leading `/`, or an empty, `.` or `..` path component.
    /// Anything else is looked up as-is, so every listed branch can be read
    /// back by its name.
    pub fn try_parse(name: String) -> Result<Self> {
        let escapes_heads = name.is_empty()
            || name
                .split('/')
                .any(|component| matches!(component, "" | "." | ".."));

        if escapes_heads {
            return Err(Error::InvalidBranchName(name));
        }

        Ok(Self(name))
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A branch ref and the commit it points to
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Branch {
    name: String,
    target: ObjectId,
}

impl Branch {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn target(&self) -> &ObjectId {
        &self.target
    }
}
