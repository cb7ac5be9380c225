mod application;
mod domain;
mod infrastructure;
mod presentation;

use anyhow::Result;
use application::UseCaseContainer;
use clap::Parser;
use domain::repositories::{FilterMechanism, LogChannel};
use infrastructure::ConfigRepository;
use infrastructure::channel::{ChannelFilterMechanism, InMemoryLogChannel};
use presentation::EventFilterController;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Event filter control console")]
struct Cli {
    /// Path to the JSON config file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Log at debug level regardless of config
    #[arg(short, long)]
    verbose: bool,
    /// Write the effective config to the config path and exit
    #[arg(long)]
    write_config: bool,
}

fn init_tracing(log_level: &str, verbose: bool) {
    let level = if verbose || cfg!(feature = "verbose-logging") {
        "debug"
    } else {
        log_level
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("eventfilter={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_repository = match cli.config {
        Some(path) => ConfigRepository::with_path(path),
        None => ConfigRepository::new(),
    };
    let config = config_repository.load()?;
    init_tracing(&config.log_level, cli.verbose);
    tracing::debug!("Loaded config from {}", config_repository.path().display());
    if config.event_filter.filtered_kinds.is_empty() {
        tracing::warn!("No filtered log kinds configured; enabling the filter drops nothing");
    }

    if cli.write_config {
        config_repository.save(&config)?;
        println!("wrote {}", config_repository.path().display());
        return Ok(());
    }

    let channel: Arc<dyn LogChannel> = Arc::new(InMemoryLogChannel::new());
    let mechanism: Arc<dyn FilterMechanism> = Arc::new(ChannelFilterMechanism::new(
        Arc::clone(&channel),
        config.event_filter.filtered_kinds.clone(),
    ));
    let use_cases = Arc::new(UseCaseContainer::new(mechanism, channel));

    let controller = EventFilterController::new(use_cases, config.event_filter.enable_on_start);
    match controller.load().await {
        Ok(enabled) => println!("event filter {}", if enabled { "enabled" } else { "disabled" }),
        Err(e) => {
            tracing::error!("Event filter service did not start: {}", e);
            println!("error: {} (use `start` to retry)", e);
        }
    }

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    presentation::console::run(&controller, stdin, tokio::io::stdout()).await
}
