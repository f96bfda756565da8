mod config;
mod models;
mod monitoring;
mod store;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use logger::init_tracing;
use thiserror::Error;
use tracing::info;

use config::Config;
use monitoring::{PollEngine, Prober};
use store::HttpStore;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0:?}")]
    Config(config::Error),
    #[error("{0:#}")]
    Startup(#[from] anyhow::Error),
}

#[derive(Debug, Parser)]
#[command(name = "upwatch-engine", version, about = "Polls HTTP monitors and reports check results to the store API")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Store API base URL (overrides the configuration file)
    #[arg(long)]
    api_url: Option<String>,

    /// Seconds between poll cycles (overrides the configuration file)
    #[arg(long)]
    interval_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    init_tracing();

    let cli = Cli::parse();
    let mut config = Config::from_config(cli.config.as_deref()).map_err(AppError::Config)?;
    if let Some(api_url) = cli.api_url {
        config.api.base_url = api_url;
    }
    if let Some(interval_secs) = cli.interval_secs {
        config.poll.interval_secs = interval_secs;
    }
    info!("{config}");

    let store = Arc::new(HttpStore::new(&config.api.base_url)?);
    let prober = Prober::new()?;
    let engine = PollEngine::new(store, prober, Duration::from_secs(config.poll.interval_secs));

    engine.run().await;

    Ok(())
}
