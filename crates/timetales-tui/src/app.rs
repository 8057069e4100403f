//! Date explorer application state.
//!
//! A single [`DateExplorer`] owns everything the UI shows: the selected
//! date, the event list from the most recent completed fetch, and which
//! of the three results states (loading, loaded, empty) is visible.
//! Fetch results arrive tagged with a sequence number; anything tagged
//! older than the newest issued fetch is stale and discarded, so a slow
//! response can never overwrite a newer one.

use timetales_types::{DaySelection, HistoricalEvent};

/// Outcome of one background events fetch.
///
/// A failed fetch delivers an empty list -- by the time an outcome
/// reaches the UI, failure and "no events recorded" are the same thing.
#[derive(Debug)]
pub struct FetchOutcome {
    /// Sequence number of the fetch that produced this outcome.
    pub seq: u64,
    /// The fetched events, in feed order.
    pub events: Vec<HistoricalEvent>,
}

/// What the results area is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsState {
    /// A fetch for the current selection is outstanding.
    Loading,
    /// The latest fetch completed with at least one event.
    Loaded,
    /// The latest fetch completed empty or failed.
    Empty,
}

/// One rendered event card: year, description, and a "learn more" link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventCard {
    /// The event's year, as display text.
    pub year: String,
    /// The event description.
    pub text: String,
    /// The resolved reference link.
    pub link: String,
}

/// Top-level state for the date explorer.
#[derive(Debug)]
pub struct DateExplorer {
    /// The date currently chosen by the user.
    pub selection: DaySelection,
    /// Events from the most recent accepted fetch.
    pub events: Vec<HistoricalEvent>,
    /// Current results area state.
    pub results: ResultsState,
    /// Scroll offset into the results area, in rows.
    pub scroll: u16,
    /// False once the user asks to quit.
    pub running: bool,
    /// Sequence number of the newest fetch issued.
    latest_seq: u64,
}

impl DateExplorer {
    /// Create the explorer positioned on today's date.
    ///
    /// The caller is expected to begin the initial fetch immediately, so
    /// the results area starts in the loading state.
    pub fn new() -> Self {
        Self {
            selection: DaySelection::today(),
            events: Vec::new(),
            results: ResultsState::Loading,
            scroll: 0,
            running: true,
            latest_seq: 0,
        }
    }

    /// Begin a new fetch for the current selection.
    ///
    /// Enters the loading state, resets the scroll position, and returns
    /// the sequence number the fetch outcome must carry to be accepted.
    pub fn begin_fetch(&mut self) -> u64 {
        self.latest_seq = self.latest_seq.wrapping_add(1);
        self.results = ResultsState::Loading;
        self.scroll = 0;
        self.latest_seq
    }

    /// Apply a completed fetch.
    ///
    /// Outcomes from superseded fetches are dropped so the visible list
    /// always reflects the newest request.
    pub fn apply_outcome(&mut self, outcome: FetchOutcome) {
        if outcome.seq != self.latest_seq {
            return;
        }
        self.results = if outcome.events.is_empty() {
            ResultsState::Empty
        } else {
            ResultsState::Loaded
        };
        self.events = outcome.events;
    }

    /// The heading shown above the results area.
    pub fn heading(&self) -> String {
        match self.results {
            ResultsState::Loading => String::from("Discovering historical events..."),
            ResultsState::Loaded => format!("Historical Events on {}", self.selection.label()),
            ResultsState::Empty => String::from("No events found for this date"),
        }
    }

    /// The cards to render, in feed order.
    pub fn cards(&self) -> Vec<EventCard> {
        self.events
            .iter()
            .map(|event| EventCard {
                year: event.year.to_string(),
                text: event.text.clone(),
                link: event.reference_link(),
            })
            .collect()
    }

    /// Scroll the results area up by `rows`.
    pub const fn scroll_up(&mut self, rows: u16) {
        self.scroll = self.scroll.saturating_sub(rows);
    }

    /// Scroll the results area down by `rows`.
    pub const fn scroll_down(&mut self, rows: u16) {
        self.scroll = self.scroll.saturating_add(rows);
    }
}

impl Default for DateExplorer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use timetales_types::EventLinks;

    fn event(year: i32, text: &str) -> HistoricalEvent {
        HistoricalEvent {
            year,
            text: String::from(text),
            links: None,
        }
    }

    #[test]
    fn begin_fetch_enters_loading() {
        let mut app = DateExplorer::new();
        app.results = ResultsState::Loaded;
        app.scroll = 7;

        app.begin_fetch();

        assert_eq!(app.results, ResultsState::Loading);
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn successful_fetch_with_events_enters_loaded() {
        let mut app = DateExplorer::new();
        let seq = app.begin_fetch();

        app.apply_outcome(FetchOutcome {
            seq,
            events: vec![event(1969, "Apollo 11 lands")],
        });

        assert_eq!(app.results, ResultsState::Loaded);
        assert_eq!(app.events.len(), 1);
        assert_eq!(app.heading(), format!("Historical Events on {}", app.selection.label()));
    }

    #[test]
    fn empty_and_failed_fetches_both_enter_empty() {
        // A failed fetch is delivered as an empty outcome; the two are
        // indistinguishable from here on.
        let mut app = DateExplorer::new();
        let seq = app.begin_fetch();

        app.apply_outcome(FetchOutcome { seq, events: Vec::new() });

        assert_eq!(app.results, ResultsState::Empty);
        assert!(app.events.is_empty());
        assert_eq!(app.heading(), "No events found for this date");
    }

    #[test]
    fn stale_outcome_is_discarded() {
        let mut app = DateExplorer::new();
        let stale_seq = app.begin_fetch();
        let fresh_seq = app.begin_fetch();

        app.apply_outcome(FetchOutcome {
            seq: fresh_seq,
            events: vec![event(1903, "First powered flight")],
        });
        app.apply_outcome(FetchOutcome {
            seq: stale_seq,
            events: vec![event(1815, "Stale result")],
        });

        assert_eq!(app.events.len(), 1);
        assert_eq!(app.events.first().map(|e| e.year), Some(1903));
        assert_eq!(app.results, ResultsState::Loaded);
    }

    #[test]
    fn stale_outcome_does_not_leave_loading() {
        let mut app = DateExplorer::new();
        let stale_seq = app.begin_fetch();
        app.begin_fetch();

        app.apply_outcome(FetchOutcome {
            seq: stale_seq,
            events: vec![event(1815, "Stale result")],
        });

        // The newest fetch is still outstanding.
        assert_eq!(app.results, ResultsState::Loading);
        assert!(app.events.is_empty());
    }

    #[test]
    fn cards_render_year_text_and_fallback_link() {
        let mut app = DateExplorer::new();
        app.selection = DaySelection::new(12, 25);
        let seq = app.begin_fetch();

        app.apply_outcome(FetchOutcome {
            seq,
            events: vec![HistoricalEvent {
                year: 1989,
                text: String::from("Test event"),
                links: Some(EventLinks::default()),
            }],
        });

        let cards = app.cards();
        assert_eq!(cards.len(), 1);
        let card = cards.first().unwrap();
        assert_eq!(card.year, "1989");
        assert_eq!(card.text, "Test event");
        assert_eq!(
            card.link,
            "https://en.wikipedia.org/w/index.php?search=1989%20Test%20event",
        );
        assert_eq!(app.heading(), "Historical Events on December 25");
    }

    #[test]
    fn cards_keep_feed_order() {
        let mut app = DateExplorer::new();
        let seq = app.begin_fetch();

        app.apply_outcome(FetchOutcome {
            seq,
            events: vec![
                event(1969, "Apollo 11 lands"),
                event(1903, "First powered flight"),
                event(1815, "Battle of Waterloo"),
            ],
        });

        let years: Vec<String> = app.cards().into_iter().map(|c| c.year).collect();
        assert_eq!(years, ["1969", "1903", "1815"]);
    }

    #[test]
    fn scrolling_saturates_at_zero() {
        let mut app = DateExplorer::new();
        app.scroll_up(5);
        assert_eq!(app.scroll, 0);

        app.scroll_down(3);
        app.scroll_up(1);
        assert_eq!(app.scroll, 2);
    }
}
