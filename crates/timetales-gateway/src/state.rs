//! Shared application state for the events gateway.

use crate::upstream::UpstreamClient;

/// Shared state injected into handlers via Axum's `State` extractor.
///
/// Holds only the upstream client. Request handling is otherwise
/// stateless, so concurrent requests share nothing mutable.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Client for the upstream historical-events feed.
    pub upstream: UpstreamClient,
}

impl AppState {
    /// Create state backed by the live upstream feed.
    pub fn new() -> Self {
        Self {
            upstream: UpstreamClient::new(),
        }
    }

    /// Create state backed by a specific upstream client.
    pub const fn with_upstream(upstream: UpstreamClient) -> Self {
        Self { upstream }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
