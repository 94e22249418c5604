/**
    Static configuration for request resolution.

    Empty values are treated the same as values that were never set.
*/
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerConfig {
    redirect: Option<String>,
    webhook_path: Option<String>,
}

impl ServerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /**
        Sets the URL that requests for `/` are redirected to.
    */
    #[must_use]
    pub fn with_redirect(mut self, url: impl Into<String>) -> Self {
        self.redirect = non_empty(url.into());
        self
    }

    /**
        Sets the full request path that triggers a refresh when requested.
    */
    #[must_use]
    pub fn with_webhook_path(mut self, path: impl Into<String>) -> Self {
        self.webhook_path = non_empty(path.into());
        self
    }

    #[must_use]
    pub fn redirect(&self) -> Option<&str> {
        self.redirect.as_deref()
    }

    #[must_use]
    pub fn webhook_path(&self) -> Option<&str> {
        self.webhook_path.as_deref()
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}
