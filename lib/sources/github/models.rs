use serde::Deserialize;
use url::Url;

use crate::release::{Asset, Release};

#[derive(Debug, Clone, Deserialize)]
pub struct GithubRelease {
    pub name: Option<String>,
    pub tag_name: String,
    pub assets: Vec<GithubAsset>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GithubAsset {
    pub name: String,
    pub browser_download_url: Url,
}

impl GithubRelease {
    /**
        The name to display for this release - GitHub allows
        releases without a title, so we fall back to the tag.
    */
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => &self.tag_name,
        }
    }
}

impl From<GithubRelease> for Release {
    fn from(release: GithubRelease) -> Self {
        let name = release.display_name().to_string();
        let assets = release
            .assets
            .into_iter()
            .map(|asset| Asset::new(asset.name, asset.browser_download_url))
            .collect();
        Release::new(name, assets)
    }
}
