//! boardsync-server: HTTP state endpoint for board pollers
//!
//! Serves the shared board document written by the `boardsync` CLI:
//! - `GET /state`: current document, empty board if none
//! - `POST /state`: replace the whole document
//! - `GET /health`: liveness

use std::path::PathBuf;

use boardsync::api::BoardApi;
use boardsync::config::BoardConfig;
use boardsync::store::fs::FileStore;
use boardsync_server::{create_router, AppState};
use clap::Parser;
use tracing::info;

#[derive(Parser)]
#[command(name = "boardsync-server")]
#[command(about = "HTTP state endpoint for boardsync pollers")]
struct Cli {
    /// Listen address (overrides config file)
    #[arg(long, env = "BOARDSYNC_BIND")]
    bind: Option<String>,

    /// State file (overrides config file)
    #[arg(long, env = "BOARDSYNC_STATE_PATH")]
    state_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("boardsync=info".parse()?)
                .add_directive("boardsync_server=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    let mut config = BoardConfig::load()?;
    if let Some(bind) = cli.bind {
        config.bind = bind;
    }
    if let Some(state_path) = cli.state_path {
        config.state_path = state_path;
    }

    info!("Starting boardsync-server");
    info!("State file: {}", config.state_path.display());
    info!(
        max_elements = config.max_elements,
        max_logs = config.max_logs,
        max_links = ?config.max_links,
        storage_timeout_ms = config.storage_timeout_ms,
        "Writer bounds"
    );

    let store = FileStore::new(&config.state_path);
    let state = AppState::new(
        BoardApi::from_config(store, &config),
        config.storage_timeout(),
    );
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind).await?;
    info!("State endpoint listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    info!("Shutting down");
}
