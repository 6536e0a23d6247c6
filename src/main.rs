//! pipeboard - A Kanban board for job applications.
//!
//! This is the main binary that launches the TUI application.

use std::{fs::OpenOptions, sync::Mutex};

use anyhow::Context;
use pipeboard_config::{Config, LoggingConfig};
use pipeboard_kanban::{FileSource, SnapshotSource, StaticSource, TracingObserver};
use pipeboard_protocol::dummy::demo_board;
use pipeboard_tui::{App, terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Environment variable overriding the configured log filter.
const LOG_ENV: &str = "PIPEBOARD_LOG";

/// Sends logs to the configured file. The terminal belongs to the UI, so
/// without a file nothing is installed.
fn init_tracing(logging: &LoggingConfig) -> anyhow::Result<()> {
    let Some(path) = &logging.file else {
        return Ok(());
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(logging.level.to_ascii_lowercase()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

fn snapshot_source(config: &Config) -> Box<dyn SnapshotSource> {
    match &config.source.snapshot_path {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(StaticSource::new(demo_board())),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().await.context("failed to load configuration")?;
    init_tracing(&config.logging)?;

    let request = config.source.first_page()?;
    let source = snapshot_source(&config);
    info!(source = %source.describe(), viewer = %config.viewer.display_label(), "starting");

    let mut app = App::new(source, request, config.viewer.clone());
    app.subscribe(TracingObserver);
    app.refresh();

    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();

    let mut terminal = terminal::setup_terminal()?;

    let result = app.run(&mut terminal).await;

    // Always restore terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;

    result
}
