use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use tokio::sync::Semaphore;
use url::Url;

use crate::{
    release::{Asset, Release},
    repo::RepoId,
    result::RedirectResult,
    sources::{ReleaseSource, github::GithubError},
};

/**
    In-memory release source for tests.

    Serves whatever release is currently set, or fails when none is.
    A gated source holds back its first fetch until the gate is opened,
    answering with the release that was upstream when the fetch started.
*/
#[derive(Debug, Default)]
pub struct FakeSource {
    upstream: Mutex<Option<Release>>,
    calls: AtomicUsize,
    gate: Option<Semaphore>,
}

impl FakeSource {
    pub fn serving(release: Release) -> Self {
        Self {
            upstream: Mutex::new(Some(release)),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self::default()
    }

    pub fn gated(release: Release) -> Self {
        Self {
            upstream: Mutex::new(Some(release)),
            calls: AtomicUsize::new(0),
            gate: Some(Semaphore::new(0)),
        }
    }

    pub fn set_upstream(&self, release: Option<Release>) {
        *self.upstream.lock() = release;
    }

    pub fn open_gate(&self) {
        if let Some(gate) = &self.gate {
            gate.add_permits(1);
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ReleaseSource for FakeSource {
    async fn fetch_latest(&self, _repo: &RepoId) -> RedirectResult<Release> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        let upstream = self.upstream.lock().clone();
        if let Some(gate) = &self.gate
            && call == 0
        {
            gate.acquire().await.expect("gate is never closed").forget();
        }
        upstream.ok_or_else(|| GithubError::Other("upstream unavailable".to_string()).into())
    }
}

pub fn test_repo() -> RepoId {
    "octo/tool".parse().unwrap()
}

pub fn release(name: &str, assets: &[&str]) -> Release {
    let assets = assets
        .iter()
        .map(|asset| {
            let url = format!("https://github.com/octo/tool/releases/download/{name}/{asset}");
            Asset::new(*asset, Url::parse(&url).unwrap())
        })
        .collect();
    Release::new(name, assets)
}
