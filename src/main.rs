//! TaskTracker binary.
//!
//! Loads configuration, builds the task store and serves the API plus the
//! compiled UI until ctrl-c.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use tasktracker_web::{AppConfig, AppState, StoreBackend, run_server, store};

mod cli;

use cli::{Cli, Commands};

const DEFAULT_LOG_FILTER: &str = "info,tasktracker_web=debug,tower_http=debug";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            config,
            bind,
            store,
            log_level,
        } => {
            init_tracing(log_level.as_deref());
            let config = load_config(config.as_deref(), bind, store)?;
            serve(config).await
        }
        Commands::CheckConfig { config } => {
            let config = load_config(config.as_deref(), None, None)?;
            let rendered = config
                .to_redacted_toml()
                .context("Failed to render configuration")?;
            print!("{rendered}");
            Ok(())
        }
    }
}

/// Initialize tracing subscriber with environment filter.
///
/// `--log-level` wins over `RUST_LOG`, which wins over the built-in default.
fn init_tracing(log_level: Option<&str>) {
    let filter = log_level
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Defaults, file, environment, then CLI flags.
fn load_config(
    path: Option<&Path>,
    bind: Option<String>,
    backend: Option<StoreBackend>,
) -> Result<AppConfig> {
    let mut config = AppConfig::load(path).with_context(|| match path {
        Some(path) => format!("Failed to load configuration from {}", path.display()),
        None => "Failed to load configuration from environment".to_string(),
    })?;

    if let Some(bind) = bind {
        config.server.bind_address = bind;
    }
    if let Some(backend) = backend {
        config.store.backend = backend;
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

async fn serve(config: AppConfig) -> Result<()> {
    let store = store::from_config(&config.store).context("Failed to build task store")?;
    info!(backend = %config.store.backend, table = %config.store.table, "Task store ready");

    run_server(&config.server, AppState::new(store))
        .await
        .with_context(|| format!("Server on {} failed", config.server.bind_address))
}
