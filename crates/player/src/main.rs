//! TTRPGZ Player - command-line composition root.

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ttrpgz_player::cli::Args;
use ttrpgz_player::{execute, AppContext, PlayerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ttrpgz_player=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let mut config = PlayerConfig::from_env().context("Invalid configuration")?;
    if let Some(storage) = args.storage {
        config.storage = storage;
    }

    tracing::debug!(
        api_url = %config.api_url,
        storage = ?config.storage,
        "Starting TTRPGZ Player"
    );

    let app = AppContext::build(&config);
    let output = execute(&app, args.command).await?;
    println!("{output}");
    Ok(())
}
