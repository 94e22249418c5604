use axum::{
    http::{StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};

use crate::release::Release;

use super::ServerConfig;

/**
    The outcome of resolving a single request path.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Temporary redirect to the given URL.
    Redirect(String),
    /// The webhook path was requested, a refresh should be started.
    RefreshAccepted,
    /// No release has been fetched yet.
    UnknownRelease,
    /// The current release has no asset matching the request path.
    AssetNotFound { release: String, asset: String },
}

impl Resolution {
    /**
        Resolves a request path against the configuration and the current release.

        Rules are checked in a fixed order and the first match wins:

        1. `/` redirects to the configured root redirect, if any
        2. The configured webhook path accepts a refresh
        3. `/<asset name>` redirects to the matching asset of the current release
    */
    #[must_use]
    pub fn resolve(path: &str, config: &ServerConfig, release: Option<&Release>) -> Self {
        if path == "/"
            && let Some(url) = config.redirect()
        {
            return Self::Redirect(url.to_string());
        }

        if config.webhook_path() == Some(path) {
            return Self::RefreshAccepted;
        }

        let Some(release) = release else {
            return Self::UnknownRelease;
        };

        match release.find_asset(path) {
            Some(asset) => Self::Redirect(asset.download_url.to_string()),
            None => Self::AssetNotFound {
                release: release.name.clone(),
                asset: path.strip_prefix('/').unwrap_or(path).to_string(),
            },
        }
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Redirect(_) => StatusCode::TEMPORARY_REDIRECT,
            Self::RefreshAccepted => StatusCode::OK,
            Self::UnknownRelease => StatusCode::INTERNAL_SERVER_ERROR,
            Self::AssetNotFound { .. } => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for Resolution {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::Redirect(url) => (status, [(LOCATION, url)]).into_response(),
            Self::RefreshAccepted => status.into_response(),
            Self::UnknownRelease => (status, "Unknown release").into_response(),
            Self::AssetNotFound { release, asset } => (
                status,
                format!("Asset {asset} not found in release {release}"),
            )
                .into_response(),
        }
    }
}
