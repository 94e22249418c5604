use thiserror::Error;

use crate::sources::github::GithubError;

#[derive(Debug, Error)]
pub enum RedirectError {
    #[error("GitHub error: {0}")]
    GitHub(#[from] GithubError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RedirectResult<T> = Result<T, RedirectError>;
