//! Application state.
//!
//! Shared state for all request handlers.

use mdoc_site::Site;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Site facade over the markdown corpus.
    pub(crate) site: Site,
    /// Site title shown in page chrome.
    pub(crate) title: String,
}
