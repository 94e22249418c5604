use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::{Method, Uri},
    response::{IntoResponse, Response},
};
use tokio::net::TcpListener;
use tracing::{debug, info, instrument};

use crate::{refresh::Refresher, result::RedirectResult, sources::ReleaseSource};

mod config;
mod resolution;

pub use self::config::ServerConfig;
pub use self::resolution::Resolution;

/**
    State shared by all request handlers.
*/
#[derive(Debug)]
pub struct AppState<S> {
    refresher: Refresher<S>,
    config: Arc<ServerConfig>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            refresher: self.refresher.clone(),
            config: Arc::clone(&self.config),
        }
    }
}

/**
    Builds the router serving redirects for the release tracked by `refresher`.

    Every path and method is routed to the same handler, which
    resolves the request path using [`Resolution::resolve`].
*/
pub fn router<S: ReleaseSource>(refresher: Refresher<S>, config: ServerConfig) -> Router {
    let state = AppState {
        refresher,
        config: Arc::new(config),
    };
    Router::new().fallback(handle::<S>).with_state(state)
}

#[instrument(skip(state), fields(path = uri.path()), level = "debug")]
async fn handle<S: ReleaseSource>(
    State(state): State<AppState<S>>,
    method: Method,
    uri: Uri,
) -> Response {
    let release = state.refresher.cache().read();
    let resolution = Resolution::resolve(uri.path(), &state.config, release.as_deref());

    if resolution == Resolution::RefreshAccepted {
        info!("Received webhook, starting a refresh");
        drop(state.refresher.spawn_refresh());
    }

    debug!(%method, status = %resolution.status(), "Resolved request");
    resolution.into_response()
}

/**
    Serves `router` on `listener` until the process exits.

    # Errors

    - If accepting connections fails.
*/
pub async fn serve(listener: TcpListener, router: Router) -> RedirectResult<()> {
    if let Ok(addr) = listener.local_addr() {
        info!("Listening on {addr}");
    }
    axum::serve(listener, router).await?;
    Ok(())
}
