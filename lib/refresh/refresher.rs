use std::sync::Arc;

use tokio::task::{JoinHandle, spawn};
use tracing::{debug, error, info, instrument};

use crate::{repo::RepoId, sources::ReleaseSource, storage::ReleaseCache};

/**
    Fetches the latest release of a single repository
    and stores it in the shared `ReleaseCache`.

    Can be cheaply cloned while still referring to the same source and cache.
*/
#[derive(Debug)]
pub struct Refresher<S> {
    source: Arc<S>,
    repo: Arc<RepoId>,
    cache: ReleaseCache,
}

impl<S> Clone for Refresher<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            repo: Arc::clone(&self.repo),
            cache: self.cache.clone(),
        }
    }
}

impl<S: ReleaseSource> Refresher<S> {
    #[must_use]
    pub fn new(source: S, repo: RepoId, cache: ReleaseCache) -> Self {
        Self {
            source: Arc::new(source),
            repo: Arc::new(repo),
            cache,
        }
    }

    #[must_use]
    pub fn repo(&self) -> &RepoId {
        &self.repo
    }

    #[must_use]
    pub fn cache(&self) -> &ReleaseCache {
        &self.cache
    }

    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /**
        Fetches the latest release and stores it in the cache.

        Failures are logged and leave the cached release untouched.
        A result is also dropped if a refresh that started later
        has already stored its own result in the meantime.

        Returns `true` if the cache was updated.
    */
    #[instrument(skip(self), fields(repo = %self.repo), level = "debug")]
    pub async fn refresh(&self) -> bool {
        let ticket = self.cache.begin_refresh();
        let release = match self.source.fetch_latest(&self.repo).await {
            Ok(release) => release,
            Err(e) => {
                error!("Error retrieving latest release: {e}");
                return false;
            }
        };

        let name = release.name.clone();
        if self.cache.replace_if_newer(ticket, release) {
            info!(release = %name, "Found latest release");
            true
        } else {
            debug!(release = %name, "Newer refresh already completed, ignoring result");
            false
        }
    }

    /**
        Starts a refresh in the background without waiting for it.

        The returned handle may be dropped, the refresh keeps running.
    */
    pub fn spawn_refresh(&self) -> JoinHandle<bool> {
        let this = self.clone();
        spawn(async move { this.refresh().await })
    }
}

#[cfg(test)]
mod tests {
    use crate::sources::testing::{FakeSource, release, test_repo};

    use super::*;

    #[tokio::test]
    async fn refresh_stores_fetched_release() {
        let fetched = release("v1.2", &["tool.zip"]);
        let refresher = Refresher::new(
            FakeSource::serving(fetched.clone()),
            test_repo(),
            ReleaseCache::new(),
        );

        assert!(refresher.refresh().await);
        assert_eq!(*refresher.cache().read().unwrap(), fetched);
    }

    #[tokio::test]
    async fn refresh_is_idempotent_for_unchanged_upstream() {
        let fetched = release("v1.2", &["tool.zip", "tool.tar.gz"]);
        let refresher = Refresher::new(
            FakeSource::serving(fetched.clone()),
            test_repo(),
            ReleaseCache::new(),
        );

        for _ in 0..3 {
            refresher.refresh().await;
            assert_eq!(*refresher.cache().read().unwrap(), fetched);
        }
        assert_eq!(refresher.source().calls(), 3);
    }

    #[tokio::test]
    async fn failed_refresh_keeps_previous_release() {
        let fetched = release("v1.2", &["tool.zip"]);
        let refresher = Refresher::new(
            FakeSource::serving(fetched.clone()),
            test_repo(),
            ReleaseCache::new(),
        );
        assert!(refresher.refresh().await);

        refresher.source().set_upstream(None);
        assert!(!refresher.refresh().await);
        assert_eq!(*refresher.cache().read().unwrap(), fetched);
    }

    #[tokio::test]
    async fn failed_refresh_leaves_empty_cache_empty() {
        let refresher = Refresher::new(FakeSource::failing(), test_repo(), ReleaseCache::new());
        assert!(!refresher.refresh().await);
        assert!(refresher.cache().read().is_none());
    }

    #[tokio::test]
    async fn spawned_refresh_runs_in_background() {
        let fetched = release("v2.0", &["tool.zip"]);
        let refresher = Refresher::new(
            FakeSource::gated(fetched.clone()),
            test_repo(),
            ReleaseCache::new(),
        );

        let handle = refresher.spawn_refresh();
        tokio::task::yield_now().await;
        assert!(refresher.cache().read().is_none());

        refresher.source().open_gate();
        assert!(handle.await.unwrap());
        assert_eq!(*refresher.cache().read().unwrap(), fetched);
    }

    #[tokio::test]
    async fn slow_refresh_does_not_overwrite_newer_result() {
        let refresher = Refresher::new(
            FakeSource::gated(release("v1.0", &["tool.zip"])),
            test_repo(),
            ReleaseCache::new(),
        );

        // The first refresh starts, then blocks inside the source
        let slow = refresher.spawn_refresh();
        while refresher.source().calls() == 0 {
            tokio::task::yield_now().await;
        }

        // A later refresh sees a newer upstream and completes first
        refresher
            .source()
            .set_upstream(Some(release("v1.1", &["tool.zip"])));
        assert!(refresher.refresh().await);

        refresher.source().open_gate();
        assert!(!slow.await.unwrap());
        assert_eq!(refresher.cache().read().unwrap().name, "v1.1");
    }
}
