//! Background fetches against the events gateway.
//!
//! Each user action spawns exactly one fetch task. The task posts the
//! selection's month and day to the gateway and delivers the outcome on
//! an unbounded channel, tagged with the sequence number it was issued
//! under. In-flight fetches are never cancelled; superseded outcomes are
//! discarded by the application state when they arrive.

use timetales_types::{DaySelection, EventsRequest, HistoricalEvent};
use tokio::sync::mpsc;
use tracing::warn;

use crate::app::FetchOutcome;

/// Fixed address of the local events gateway.
const GATEWAY_URL: &str = "http://127.0.0.1:5000/api/events";

/// Errors from a single gateway fetch.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The gateway could not be reached.
    #[error("gateway request failed: {0}")]
    Request(String),

    /// The gateway responded with a non-success status.
    #[error("gateway returned status {0}")]
    Status(u16),

    /// The gateway response body could not be decoded.
    #[error("gateway response decode failed: {0}")]
    Decode(String),
}

/// HTTP client for the events gateway.
///
/// Cloning is cheap and shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    client: reqwest::Client,
    url: String,
}

impl GatewayClient {
    /// Create a client against the gateway's fixed local address.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            url: String::from(GATEWAY_URL),
        }
    }

    /// Ask the gateway for the events on the selected date.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the request cannot be sent, the gateway
    /// responds with a non-success status, or the body does not decode.
    pub async fn events_for(
        &self,
        selection: DaySelection,
    ) -> Result<Vec<HistoricalEvent>, FetchError> {
        let request = request_for(selection);

        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        response
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}

impl Default for GatewayClient {
    fn default() -> Self {
        Self::new()
    }
}

/// The request body for a selection: its 1-indexed month and its day.
const fn request_for(selection: DaySelection) -> EventsRequest {
    EventsRequest {
        month: selection.month(),
        day: selection.day(),
    }
}

/// Spawn a background fetch for `selection`, tagged with `seq`.
///
/// The outcome is delivered on `tx`. A failed fetch logs the cause and
/// delivers an empty event list; from the receiver's side it looks the
/// same as a date with no recorded events.
pub fn spawn_fetch(
    client: &GatewayClient,
    selection: DaySelection,
    seq: u64,
    tx: mpsc::UnboundedSender<FetchOutcome>,
) {
    let client = client.clone();
    tokio::spawn(async move {
        let events = match client.events_for(selection).await {
            Ok(events) => events,
            Err(e) => {
                warn!(
                    error = %e,
                    month = selection.month(),
                    day = selection.day(),
                    "events fetch failed",
                );
                Vec::new()
            }
        };
        // The receiver only disappears on shutdown; a send failure here
        // means the outcome has nowhere to go and can be dropped.
        let _ = tx.send(FetchOutcome { seq, events });
    });
}
