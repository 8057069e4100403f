//! HTTP client for the Wikipedia "on this day" feed.
//!
//! The feed is keyed by calendar month and day; the year is irrelevant
//! and the response covers events from many different years. The gateway
//! does not transform the data: the `events` array is relayed to callers
//! exactly as received.

use timetales_types::{HistoricalEvent, OnThisDay};

use crate::error::GatewayError;

/// Default base URL of the Wikipedia REST API.
const DEFAULT_BASE_URL: &str = "https://en.wikipedia.org/api/rest_v1";

/// Client for the upstream historical-events feed.
///
/// Wraps a pooled [`reqwest::Client`]; cloning is cheap and shares the
/// underlying connection pool.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: reqwest::Client,
    base_url: String,
}

impl UpstreamClient {
    /// Create a client against the live Wikipedia REST API.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against a specific base URL.
    ///
    /// Integration tests point this at a stub server on a loopback
    /// listener; the gateway binary always uses the default base.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch the events that occurred on `month`/`day`.
    ///
    /// Both values are interpolated into the feed path as given; the
    /// feed itself rejects out-of-range dates with a non-success status,
    /// which maps to the same error as any other upstream failure.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the request cannot be sent, the feed
    /// responds with a non-success status, or the body does not decode
    /// into the expected envelope.
    pub async fn events_on(&self, month: u32, day: u32) -> Result<Vec<HistoricalEvent>, GatewayError> {
        let url = format!("{}/feed/onthisday/events/{month}/{day}", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| GatewayError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("unable to read error body"));
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let feed: OnThisDay = response
            .json()
            .await
            .map_err(|e| GatewayError::Decode(e.to_string()))?;

        Ok(feed.events)
    }
}

impl Default for UpstreamClient {
    fn default() -> Self {
        Self::new()
    }
}
