// src/main.rs
mod app;
mod config;
mod errors;
mod events;
mod feedback;
mod logging;
mod page;
mod ui;
mod utils;

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::app::App;
use crate::config::{default_log_path, load_or_init_config};
use crate::events::handler::handle_key;
use crate::events::spawner::{Event, EventSpawner};
use crate::ui::{card, terminal};
use crate::utils::clipboard::SystemClipboard;

/// Terminal contact card: press `c` to copy the address to the clipboard
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the platform config dir
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Append logs to this file
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

/// Combine the event loop result with terminal teardown. The loop error
/// wins; a teardown error is reported only when the loop succeeded.
fn finish(outcome: Result<()>, teardown: Result<()>) -> Result<()> {
    outcome?;
    teardown
}

async fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let mut events = EventSpawner::new();
    while !app.exit {
        terminal.draw(|f| card::draw(f, app))?;
        match events.next().await {
            Event::Input(key) => handle_key(app, key),
            Event::Tick => {}
            Event::Stop => break,
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_or_init_config(cli.config.as_deref()).context("loading config")?;

    let log_path = match cli.log_file.or_else(|| config.log_file.clone()) {
        Some(path) => path,
        None => default_log_path().context("locating log directory")?,
    };
    logging::init_logging(&log_path)
        .with_context(|| format!("opening log file {}", log_path.display()))?;
    tracing::info!(email = %config.email, log = %log_path.display(), "starting contact card");

    let mut app = App::new(&config.email, Arc::new(SystemClipboard::spawn()));

    terminal::install_panic_hook();
    let mut term = terminal::setup_terminal().context("setting up terminal")?;
    let outcome = run(&mut term, &mut app).await;
    let teardown = terminal::restore_terminal()
        .context("restoring terminal")
        .and_then(|()| term.show_cursor().context("showing cursor"));
    if let Err(e) = &teardown {
        tracing::error!("terminal teardown failed: {:#}", e);
    }

    tracing::info!("contact card closed");
    finish(outcome, teardown)
}
