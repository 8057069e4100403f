//! Shared type definitions for the TimeTales events explorer.
//!
//! This crate is the single source of truth for the shapes both tiers
//! speak: the gateway relays [`HistoricalEvent`] records from the upstream
//! feed, and the terminal client owns a [`DaySelection`] and derives
//! fallback reference links for events without one.
//!
//! # Modules
//!
//! - [`date`] -- The user's selected calendar date and its stepping rules
//! - [`event`] -- Wire types for events, requests, and the feed envelope
//! - [`link`] -- Wikipedia search-URL derivation for linkless events

pub mod date;
pub mod event;
pub mod link;

// Re-export all public types at crate root for convenience.
pub use date::{DaySelection, days_in_month};
pub use event::{EventLinks, EventsRequest, HistoricalEvent, OnThisDay};
pub use link::wikipedia_search_url;
