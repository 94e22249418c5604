use std::{fmt, str::FromStr};

use thiserror::Error;

use super::util::is_invalid_identifier;

/**
    Error type representing the possible errors that can occur when parsing a `RepoId`.
*/
#[derive(Debug, Error)]
pub enum RepoIdParseError {
    #[error("the repository must be specified")]
    Empty,
    #[error("the repository must be specified in `owner/repo` format")]
    MissingSeparator,
    #[error("owner '{0}' is empty or invalid")]
    InvalidOwner(String),
    #[error("repository name '{0}' is empty or invalid")]
    InvalidName(String),
}

/**
    A repository identifier, which includes the owner and name of a repository.

    Used to select the single upstream repository whose releases are tracked.
*/
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoId {
    pub(super) owner: String,
    pub(super) name: String,
}

impl RepoId {
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FromStr for RepoId {
    type Err = RepoIdParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(RepoIdParseError::Empty);
        }

        let Some((before, after)) = s.split_once('/') else {
            return Err(RepoIdParseError::MissingSeparator);
        };

        let before = before.trim();
        let after = after.trim();

        if is_invalid_identifier(before) {
            return Err(RepoIdParseError::InvalidOwner(before.to_string()));
        }
        if is_invalid_identifier(after) {
            return Err(RepoIdParseError::InvalidName(after.to_string()));
        }

        Ok(Self {
            owner: before.to_string(),
            name: after.to_string(),
        })
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
