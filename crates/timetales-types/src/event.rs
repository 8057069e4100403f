//! Wire types for the events lookup.
//!
//! These shapes cross two boundaries: the upstream feed to the gateway,
//! and the gateway to the terminal client. The gateway relays events
//! verbatim, so serialization must round-trip exactly -- an absent
//! `links` object stays absent, and an absent `wikipedia` entry stays
//! absent, rather than appearing as an explicit `null`.

use serde::{Deserialize, Serialize};

use crate::link::wikipedia_search_url;

/// A single date-anchored historical record from the upstream feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricalEvent {
    /// The year the event occurred.
    pub year: i32,
    /// Human-readable description of the event.
    pub text: String,
    /// Reference links supplied by the feed, when it has any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<EventLinks>,
}

impl HistoricalEvent {
    /// The "learn more" target for this event.
    ///
    /// Prefers the feed's direct Wikipedia reference; events without one
    /// get a Wikipedia search URL derived from their year and text.
    pub fn reference_link(&self) -> String {
        self.links
            .as_ref()
            .and_then(|links| links.wikipedia.clone())
            .unwrap_or_else(|| wikipedia_search_url(self.year, &self.text))
    }
}

/// Reference links attached to an event by the upstream feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLinks {
    /// Direct Wikipedia article URL for the event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wikipedia: Option<String>,
}

/// Request body for the gateway's events lookup.
///
/// Both values are forwarded to the upstream feed as given; the feed
/// itself rejects out-of-range dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventsRequest {
    /// Calendar month, 1-12.
    pub month: u32,
    /// Day of month, 1-31.
    pub day: u32,
}

/// The upstream "on this day" response envelope.
///
/// The feed returns more sections than this (births, deaths, holidays);
/// everything except `events` is ignored. A body missing `events` or
/// carrying ill-typed entries does not decode and is treated as an
/// upstream failure.
#[derive(Debug, Clone, Deserialize)]
pub struct OnThisDay {
    /// Events that occurred on the requested calendar date, in feed order.
    pub events: Vec<HistoricalEvent>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn event_without_links_round_trips_without_links_field() {
        let json = r#"{"year":1903,"text":"First powered flight"}"#;
        let event: HistoricalEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.links, None);
        assert_eq!(serde_json::to_string(&event).unwrap(), json);
    }

    #[test]
    fn event_with_empty_links_round_trips_empty_object() {
        let json = r#"{"year":1989,"text":"Test event","links":{}}"#;
        let event: HistoricalEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.links, Some(EventLinks { wikipedia: None }));
        assert_eq!(serde_json::to_string(&event).unwrap(), json);
    }

    #[test]
    fn event_with_wikipedia_link_round_trips() {
        let json = concat!(
            r#"{"year":1969,"text":"Apollo 11 lands","#,
            r#""links":{"wikipedia":"https://en.wikipedia.org/wiki/Apollo_11"}}"#,
        );
        let event: HistoricalEvent = serde_json::from_str(json).unwrap();
        assert_eq!(serde_json::to_string(&event).unwrap(), json);
    }

    #[test]
    fn reference_link_prefers_feed_link() {
        let event = HistoricalEvent {
            year: 1969,
            text: String::from("Apollo 11 lands"),
            links: Some(EventLinks {
                wikipedia: Some(String::from("https://en.wikipedia.org/wiki/Apollo_11")),
            }),
        };
        assert_eq!(event.reference_link(), "https://en.wikipedia.org/wiki/Apollo_11");
    }

    #[test]
    fn reference_link_falls_back_to_search_url() {
        let event = HistoricalEvent {
            year: 1969,
            text: String::from("Apollo 11 lands"),
            links: Some(EventLinks::default()),
        };
        assert_eq!(
            event.reference_link(),
            "https://en.wikipedia.org/w/index.php?search=1969%20Apollo%2011%20lands",
        );
    }

    #[test]
    fn envelope_ignores_other_feed_sections() {
        let json = r#"{"events":[{"year":1969,"text":"Apollo 11 lands"}],"births":[],"selected":[]}"#;
        let feed: OnThisDay = serde_json::from_str(json).unwrap();
        assert_eq!(feed.events.len(), 1);
    }

    #[test]
    fn envelope_without_events_fails_to_decode() {
        let json = r#"{"births":[]}"#;
        assert!(serde_json::from_str::<OnThisDay>(json).is_err());
    }
}
