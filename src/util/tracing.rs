use std::io::stderr;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, filter::Directive};

#[cfg(debug_assertions)]
const FMT_PRETTY: bool = true;

#[cfg(not(debug_assertions))]
const FMT_PRETTY: bool = false;

// Keeps the HTTP stack quiet even when debugging
// release-redirect itself using RUST_LOG=debug or RUST_LOG=trace
const QUIET_DIRECTIVES: [&str; 6] = [
    "reqwest=info",
    "rustls=info",
    "tower=info",
    "hyper=info",
    "hyper_util=info",
    "h2=info",
];

pub fn init() {
    let mut tracing_env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    for directive in QUIET_DIRECTIVES {
        if let Ok(directive) = directive.parse::<Directive>() {
            tracing_env_filter = tracing_env_filter.add_directive(directive);
        }
    }

    // Use the excessively verbose and pretty tracing-subscriber during
    // development, and a more concise and less pretty output in production.
    if FMT_PRETTY {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_env_filter)
            .with_writer(stderr)
            .pretty()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_env_filter)
            .with_writer(stderr)
            .with_target(false)
            .init();
    }
}
