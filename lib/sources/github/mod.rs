#![allow(clippy::missing_errors_doc)]

use reqwest_middleware::ClientWithMiddleware;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use reqwest::{
    StatusCode,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderName, HeaderValue},
};

use crate::{release::Release, repo::RepoId, result::RedirectResult};

use super::{ReleaseSource, client::create_client};

const BASE_URL: &str = "https://api.github.com";

pub mod models;
mod result;

use self::models::GithubRelease;

pub use self::result::{GithubError, GithubResult};

#[derive(Debug, Clone)]
pub struct GithubProvider {
    client: ClientWithMiddleware,
    has_auth: bool,
}

impl GithubProvider {
    fn new_inner(pat: Option<String>) -> GithubResult<Self> {
        let has_auth = pat.is_some();
        let headers = {
            let mut headers = HeaderMap::new();
            headers.insert(
                HeaderName::from_static("x-github-api-version"),
                HeaderValue::from_static("2022-11-28"),
            );
            if let Some(pat) = pat {
                let token = format!("Bearer {pat}");
                headers.insert(AUTHORIZATION, HeaderValue::from_str(&token)?);
            }
            headers
        };

        let client = create_client(headers)?;

        Ok(Self { client, has_auth })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> GithubResult<T> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/vnd.github.v3+json")
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    /**
        Creates a new GitHub source instance.

        This instance is unauthenticated and may be rate limited and/or unable to
        access private repositories. To use an access token, use `new_authenticated`.

        # Errors

        - If the GitHub API client could not be created.
    */
    pub fn new() -> GithubResult<Self> {
        Self::new_inner(None)
    }

    /**
        Creates a new authenticated GitHub source instance with a token.

        Note that this does not verify the formatting or validity of the token,
        an invalid token will only surface as failed fetches later on.

        # Errors

        - If the GitHub API client could not be created.
        - If the token can not be used as a header value.
    */
    pub fn new_authenticated(pat: impl AsRef<str>) -> GithubResult<Self> {
        let pat: String = pat.as_ref().trim().to_string();
        Self::new_inner(Some(pat))
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.has_auth
    }

    /**
        Fetches the latest published release for the given repository.
    */
    #[instrument(skip(self), fields(%repo), level = "debug")]
    pub async fn get_latest_release(&self, repo: &RepoId) -> GithubResult<Release> {
        debug!(%repo, "fetching latest release for repository");

        let url = format!(
            "{BASE_URL}/repos/{owner}/{name}/releases/latest",
            owner = repo.owner(),
            name = repo.name(),
        );

        let release: GithubRelease = match self.get_json(&url).await {
            Err(e) if is_404(&e) => {
                return Err(GithubError::LatestReleaseNotFound(repo.clone()));
            }
            Err(e) => return Err(e),
            Ok(r) => r,
        };

        debug!(
            tag = %release.tag_name,
            assets = release.assets.len(),
            "fetched latest release"
        );

        Ok(release.into())
    }
}

impl ReleaseSource for GithubProvider {
    async fn fetch_latest(&self, repo: &RepoId) -> RedirectResult<Release> {
        Ok(self.get_latest_release(repo).await?)
    }
}

fn is_404(err: &GithubError) -> bool {
    if let GithubError::Reqwest(reqwest_err) = err
        && let Some(status) = reqwest_err.status()
    {
        return status == StatusCode::NOT_FOUND;
    }
    false
}
