use std::time::Duration;

use anyhow::{Context, Result};
use async_signal::Signal;
use clap::Parser;
use tokio::{net::TcpListener, task::JoinError};
use tracing::info;

use release_redirect::{
    refresh::{Poller, Refresher},
    repo::RepoId,
    server::{ServerConfig, router, serve},
    storage::ReleaseCache,
};

use crate::util::{github_release_source, spawn_signal_task};

/// Redirects requests for release assets to the
/// latest release of a GitHub repository.
#[derive(Debug, Parser)]
#[clap(author, version, about)]
pub struct Cli {
    /// The repository to redirect releases for, in owner/repo format.
    #[clap(long, env = "REPO")]
    pub repo: RepoId,

    /// The port to listen on for HTTP requests.
    #[clap(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Seconds to wait between polling for releases, 0 to disable polling.
    #[clap(long, env = "POLL", default_value_t = 3600)]
    pub poll: u64,

    /// If specified, requests for / will be redirected to this URL.
    #[clap(long, env = "REDIRECT")]
    pub redirect: Option<String>,

    /// Full path to receive release webhooks from GitHub on.
    #[clap(long, env = "WEBHOOK")]
    pub webhook: Option<String>,

    /// GitHub access token, for private repositories or higher rate limits.
    #[clap(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let mut signal_task = spawn_signal_task().context("Failed to listen for signals")?;

        let source = github_release_source(self.github_token.as_deref())?;
        let refresher = Refresher::new(source, self.repo, ReleaseCache::new());
        let config = ServerConfig::new()
            .with_redirect(self.redirect.unwrap_or_default())
            .with_webhook_path(self.webhook.unwrap_or_default());

        info!(repo = %refresher.repo(), "Tracking latest release");

        let period = Duration::from_secs(self.poll);
        let poller = tokio::select! {
            poller = Poller::start(&refresher, period) => poller,
            sig = &mut signal_task => {
                log_signal(sig);
                return Ok(());
            }
        };

        let listener = TcpListener::bind(("0.0.0.0", self.port))
            .await
            .with_context(|| format!("Failed to listen for requests on port {}", self.port))?;

        tokio::select! {
            result = serve(listener, router(refresher, config)) => {
                poller.stop();
                result.context("Failed to serve requests")?;
            }
            sig = &mut signal_task => {
                poller.stop();
                log_signal(sig);
            }
        }

        Ok(())
    }
}

fn log_signal(sig: Result<Option<Signal>, JoinError>) {
    match sig {
        Ok(Some(sig)) => info!("Received {sig:?}, exiting"),
        _ => info!("Stopped listening for signals, exiting"),
    }
}
