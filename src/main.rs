//! Binary entry point for the container init helper.
//!
//! The runtime logic lives in the `postgres_uid_init` library, so this
//! binary only installs the tracing subscriber, parses the CLI, and
//! delegates. It exits `0` after a graceful interrupt during the idle park.

use anyhow::Result;
use clap::Parser;
use postgres_uid_init::cli::Cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "postgres_uid_init=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    postgres_uid_init::run(Cli::parse()).await
}
