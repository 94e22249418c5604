use anyhow::{Context, Result};

use release_redirect::sources::GithubProvider;

pub fn github_release_source(token: Option<&str>) -> Result<GithubProvider> {
    // A token is only needed for private repositories or higher rate limits
    let token = token.map(str::trim).filter(|token| !token.is_empty());
    let provider = match token {
        Some(token) => GithubProvider::new_authenticated(token),
        None => GithubProvider::new(),
    };
    provider.context("Failed to create GitHub API client")
}
