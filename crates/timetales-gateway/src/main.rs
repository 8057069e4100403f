//! Events gateway binary for TimeTales.
//!
//! Serves the API the terminal client talks to: one events lookup route
//! proxying to the Wikipedia "on this day" feed, plus an HTML status
//! page. The server is stateless and holds no configuration beyond the
//! fixed listening port.

use std::sync::Arc;

use timetales_gateway::server::{ServerConfig, start_server};
use timetales_gateway::state::AppState;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Application entry point.
///
/// Initializes logging, builds the shared state, and serves until the
/// process is terminated.
///
/// # Errors
///
/// Returns an error if the server cannot bind or fails while serving.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("timetales-gateway starting");

    let config = ServerConfig::default();
    let state = Arc::new(AppState::new());

    start_server(&config, state).await?;

    Ok(())
}
