//! Wikipedia search-URL derivation for events without a direct link.
//!
//! The upstream feed attaches a direct article link to most events but
//! not all of them. For the rest, the "learn more" target is a Wikipedia
//! search for the literal string `"<year> <text>"`.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Fixed Wikipedia search endpoint for fallback links.
const SEARCH_PATH: &str = "https://en.wikipedia.org/w/index.php?search=";

/// Characters left unescaped in the search query.
///
/// ASCII alphanumerics plus `- _ . ! ~ * ' ( )`; everything else is
/// percent-encoded, so a space becomes `%20` rather than `+`.
const QUERY: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Build the fallback search URL for an event's year and text.
pub fn wikipedia_search_url(year: i32, text: &str) -> String {
    let query = format!("{year} {text}");
    format!("{SEARCH_PATH}{}", utf8_percent_encode(&query, QUERY))
}
