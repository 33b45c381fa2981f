mod render;
mod setup;

use anyhow::Context;
use boardsync::api::BoardApi;
use boardsync::config::BoardConfig;
use boardsync::error::BoardError;
use boardsync::store::fs::FileStore;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use setup::{Cli, USAGE};

pub fn run() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = BoardConfig::load().context("loading configuration")?;
    let store = FileStore::new(&config.state_path);
    let api = BoardApi::from_config(store, &config);

    tracing::debug!(command = %cli.command, path = %config.state_path.display(), "running mutation");

    let mut result = match api.run(&cli.command, cli.text.as_deref()) {
        Ok(result) => result,
        Err(e @ BoardError::UnknownCommand(_)) => {
            eprintln!("{}", USAGE);
            return Err(e.into());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("updating {}", config.state_path.display()))
        }
    };

    if let Some(doc) = &result.document {
        result.add_message(render::summary(doc));
    }
    render::print_messages(&result.messages);
    Ok(())
}

/// Diagnostics go to stderr so stdout stays clean for automation.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
