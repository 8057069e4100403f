//! Error types for the events gateway.
//!
//! [`GatewayError`] unifies every upstream failure mode into a single
//! enum that converts into an HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation. The
//! response body is deliberately uniform: callers learn that the lookup
//! failed, never why. The cause is logged server-side only.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

/// Uniform error message returned for every failed events lookup.
pub const FETCH_FAILED: &str = "Failed to fetch events";

/// Errors that can occur while proxying an events lookup upstream.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The upstream request could not be sent or the connection failed.
    #[error("upstream request failed: {0}")]
    Request(String),

    /// The upstream responded with a non-success status.
    #[error("upstream returned {status}: {body}")]
    Status {
        /// The HTTP status code the upstream returned.
        status: u16,
        /// The upstream error body, captured for the server-side log.
        body: String,
    },

    /// The upstream body could not be decoded into the expected shape.
    #[error("upstream payload decode failed: {0}")]
    Decode(String),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        // The cause goes to the log; the response carries none of it.
        error!(error = %self, "events lookup failed");

        let body = serde_json::json!({ "error": FETCH_FAILED });
        (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
    }
}
