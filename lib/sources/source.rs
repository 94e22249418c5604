use std::future::Future;

use crate::{release::Release, repo::RepoId, result::RedirectResult};

/**
    A source for releases.

    Fetching is read-only, a source never stores what it fetched
    anywhere, that is the responsibility of the caller.
*/
pub trait ReleaseSource: Send + Sync + 'static {
    /**
        Fetches the latest published release for the given repository.

        # Errors

        - If the upstream request failed, returned an unsuccessful
          status, or returned a payload that could not be parsed.
    */
    fn fetch_latest(&self, repo: &RepoId) -> impl Future<Output = RedirectResult<Release>> + Send;
}
