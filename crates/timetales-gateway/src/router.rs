//! Axum router construction for the events gateway.
//!
//! Assembles the routes into a single [`Router`] with CORS middleware
//! enabled so any origin can call the events endpoint.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the gateway.
///
/// The router includes:
/// - `GET /` -- minimal HTML status page
/// - `POST /api/events` -- proxy a month/day events lookup upstream
///
/// CORS is configured to allow any origin, method, and headers.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Status page
        .route("/", get(handlers::index))
        // Events lookup
        .route("/api/events", post(handlers::fetch_events))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
