//! HTTP endpoint handlers for the events gateway.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Minimal HTML status page |
//! | `POST` | `/api/events` | Proxy a month/day events lookup upstream |

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use timetales_types::{EventsRequest, HistoricalEvent};

use crate::error::GatewayError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET / -- minimal HTML status page
// ---------------------------------------------------------------------------

/// Serve a minimal HTML page naming the service and its API surface.
pub async fn index() -> impl IntoResponse {
    Html(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>TimeTales Gateway</title>
    <style>
        body {
            background: #0d1117;
            color: #c9d1d9;
            font-family: 'Cascadia Code', 'Fira Code', 'Consolas', monospace;
            padding: 2rem;
            max-width: 800px;
            margin: 0 auto;
        }
        h1 { color: #58a6ff; margin-bottom: 0.25rem; }
        .subtitle { color: #8b949e; margin-top: 0; }
        .status { color: #3fb950; font-weight: bold; }
        code { background: #161b22; border: 1px solid #30363d; border-radius: 6px; padding: 0.2rem 0.4rem; }
        li { padding: 0.3rem 0; list-style: none; }
        li::before { content: "POST "; color: #7ee787; font-weight: bold; }
    </style>
</head>
<body>
    <h1>TimeTales Gateway</h1>
    <p class="subtitle">Historical-events proxy for the Wikipedia on-this-day feed</p>

    <p>Status: <span class="status">RUNNING</span></p>

    <h2>API Endpoints</h2>
    <ul>
        <li><code>/api/events</code> -- body <code>{"month": 12, "day": 25}</code>, returns the events for that calendar date</li>
    </ul>
</body>
</html>"#,
    )
}

// ---------------------------------------------------------------------------
// POST /api/events -- proxy an events lookup
// ---------------------------------------------------------------------------

/// Proxy an events lookup to the upstream feed.
///
/// Responds `200` with the feed's `events` array relayed verbatim, or
/// `500` with the uniform error body on any upstream failure. No other
/// status codes are produced by this route.
pub async fn fetch_events(
    State(state): State<Arc<AppState>>,
    Json(request): Json<EventsRequest>,
) -> Result<Json<Vec<HistoricalEvent>>, GatewayError> {
    let events = state.upstream.events_on(request.month, request.day).await?;
    Ok(Json(events))
}
