use url::Url;

/**
    A release of the tracked repository, containing
    its display name and the list of downloadable assets.

    Releases are never modified after being fetched, a newer
    release always replaces an older one in its entirety.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    pub name: String,
    pub assets: Vec<Asset>,
}

/**
    A single downloadable file attached to a release.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub name: String,
    pub download_url: Url,
}

impl Release {
    #[must_use]
    pub fn new(name: impl Into<String>, assets: Vec<Asset>) -> Self {
        Self {
            name: name.into(),
            assets,
        }
    }

    /**
        Finds the asset served at the given request path.

        The path must be exactly `/` followed by the asset name, matching
        is case-sensitive, and the first matching asset in the list wins.
    */
    #[must_use]
    pub fn find_asset(&self, path: &str) -> Option<&Asset> {
        let name = path.strip_prefix('/')?;
        self.assets.iter().find(|asset| asset.name == name)
    }
}

impl Asset {
    #[must_use]
    pub fn new(name: impl Into<String>, download_url: Url) -> Self {
        Self {
            name: name.into(),
            download_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(name: &str, url: &str) -> Asset {
        Asset::new(name, url.parse().unwrap())
    }

    fn release() -> Release {
        Release::new(
            "v1.2",
            vec![
                asset("tool.zip", "https://example.com/a/tool.zip"),
                asset("tool.tar.gz", "https://example.com/a/tool.tar.gz"),
                asset("tool.zip", "https://example.com/b/tool.zip"),
            ],
        )
    }

    #[test]
    fn find_asset_exact_name() {
        let release = release();
        let found = release.find_asset("/tool.tar.gz").unwrap();
        assert_eq!(
            found.download_url.as_str(),
            "https://example.com/a/tool.tar.gz"
        );
    }

    #[test]
    fn find_asset_first_duplicate_wins() {
        let release = release();
        let found = release.find_asset("/tool.zip").unwrap();
        assert_eq!(found.download_url.as_str(), "https://example.com/a/tool.zip");
    }

    #[test]
    fn find_asset_is_case_sensitive() {
        assert!(release().find_asset("/TOOL.zip").is_none());
    }

    #[test]
    fn find_asset_requires_leading_separator() {
        assert!(release().find_asset("tool.zip").is_none());
        assert!(release().find_asset("//tool.zip").is_none());
        assert!(release().find_asset("/a/tool.zip").is_none());
    }
}
