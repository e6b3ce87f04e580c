use std::io::Write;

use calvault_app::cli::Cli;
use calvault_app::commands;
use calvault_core::config::load_config;
use calvault_store::FileCalendarRepository;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    let mut config = load_config()?;

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    tracing::debug!(config = ?config, "Configuration loaded");

    if let Some(root) = cli.root {
        config.storage.root = root;
    }

    let repo = FileCalendarRepository::from_config(&config.storage)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::run(&repo, cli.command, &mut out)?;
    out.flush()?;

    Ok(())
}
