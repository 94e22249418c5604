use std::process::exit;

use clap::Parser;
use tracing::error;

mod cli;
mod util;

use cli::Cli;
use util::init_tracing;

#[tokio::main]
async fn main() {
    // NOTE: Parsing happens first so that a missing or malformed
    // repository prints usage and exits before anything else runs.
    let cli = Cli::parse();

    init_tracing();

    if let Err(e) = cli.run().await {
        error!("{e:#}");
        exit(1);
    }
}
