use std::time::Duration;

use reqwest::{
    Client, Error,
    header::{HeaderMap, HeaderValue, USER_AGENT},
};

use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;

const USER_AGENT_VALUE: &str = concat!(
    env!("CARGO_PKG_NAME"),
    "/",
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("CARGO_PKG_REPOSITORY"),
    ")",
);

/*
    Adds middleware for tracing of HTTP requests.

    Failed requests are not retried here, the next
    scheduled refresh is responsible for trying again.
*/
fn add_client_middleware(client: Client) -> ClientWithMiddleware {
    ClientBuilder::new(client)
        .with(TracingMiddleware::default())
        .build()
}

/**
    Creates a client with:

    - HTTPS only
    - Timeouts for connection and response
    - All common compression algorithms enabled
    - User agent set to `<crate_name>/<crate_version> (<repository_url>)`
*/
pub fn create_client(mut default_headers: HeaderMap) -> Result<ClientWithMiddleware, Error> {
    default_headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

    let client = Client::builder()
        .default_headers(default_headers)
        .https_only(true)
        .connect_timeout(Duration::from_secs(15))
        .timeout(Duration::from_secs(60))
        .gzip(true)
        .brotli(true)
        .deflate(true)
        .build()?;

    Ok(add_client_middleware(client))
}
