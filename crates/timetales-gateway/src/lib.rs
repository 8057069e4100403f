//! Events gateway for TimeTales.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **`POST /api/events`** -- proxy a month/day lookup to the upstream
//!   Wikipedia "on this day" feed and relay its `events` array verbatim
//! - **`GET /`** -- minimal HTML status page naming the service and its
//!   API surface
//!
//! # Architecture
//!
//! The gateway is a stateless pass-through: each request triggers one
//! outbound call via the shared [`UpstreamClient`] and relays the result.
//! Any upstream failure -- unreachable host, non-success status, or a
//! payload that does not decode -- collapses into a single uniform
//! `500 {"error": "Failed to fetch events"}` response. The underlying
//! cause is logged server-side and never surfaced to callers.
//!
//! [`UpstreamClient`]: upstream::UpstreamClient

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;
pub mod upstream;

// Re-export primary types for convenience.
pub use error::GatewayError;
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::AppState;
pub use upstream::UpstreamClient;
