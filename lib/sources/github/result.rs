use thiserror::Error;

use crate::repo::RepoId;

#[derive(Debug, Error)]
pub enum GithubError {
    #[error("no latest release was found for repository '{0}'")]
    LatestReleaseNotFound(RepoId),
    #[error("failed to build client - invalid header value: {0}")]
    ReqwestHeader(#[from] reqwest::header::InvalidHeaderValue),
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("reqwest middleware error: {0}")]
    ReqwestMiddleware(#[from] reqwest_middleware::Error),
    #[error("other error: {0}")]
    Other(String),
}

pub type GithubResult<T> = Result<T, GithubError>;
