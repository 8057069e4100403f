//! Terminal date explorer binary for TimeTales.
//!
//! Owns the selected date, fetches events from the local gateway on
//! startup and on every date change, and renders the results. The
//! gateway must already be running on its fixed local port.
//!
//! # Event loop
//!
//! One cooperative loop per frame: draw the current state, poll for a
//! key event, then drain any completed fetch outcomes. Fetches run on
//! background tasks and report back over a channel, so the loop never
//! blocks on the network.

mod app;
mod fetch;
mod keys;
mod render;
mod terminal;

use std::io::Stdout;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use crate::app::DateExplorer;
use crate::fetch::GatewayClient;
use crate::keys::{KeyAction, handle_key};

/// How long each frame waits for a key event before redrawing.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Application entry point.
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// on the way out regardless of how the loop ended.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or restored, or if
/// the event loop fails.
#[tokio::main]
async fn main() -> Result<()> {
    // Log to stderr only when explicitly asked; an unconditional
    // subscriber would write over the alternate screen.
    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .with_target(true)
            .init();
    }

    terminal::install_panic_hook();
    let mut term = terminal::setup_terminal()?;

    let result = run(&mut term).await;

    terminal::restore_terminal()?;
    result
}

/// Main event loop: draw, poll input, drain fetch outcomes.
async fn run(term: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    let client = GatewayClient::new();
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut app = DateExplorer::new();

    // Initial load for today's date.
    let seq = app.begin_fetch();
    fetch::spawn_fetch(&client, app.selection, seq, tx.clone());

    while app.running {
        term.draw(|frame| render::draw(frame, &app))?;

        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && handle_key(&mut app, key) == KeyAction::Refetch
        {
            let seq = app.begin_fetch();
            fetch::spawn_fetch(&client, app.selection, seq, tx.clone());
        }

        while let Ok(outcome) = rx.try_recv() {
            app.apply_outcome(outcome);
        }
    }

    Ok(())
}
