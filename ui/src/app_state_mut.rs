//! Defines the mutable, reactive state for the application's UI.

use api::chain::Chain;
use api::search::RecentSearches;
use dioxus::prelude::*;

/// Pico color scheme.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value of the `data-theme` attribute.
    pub fn attr(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// A reactive state provided as a Dioxus context for mutable UI data.
///
/// Holds `Signal`s for UI state shared across screens. It is separate from
/// the immutable `AppState`.
#[derive(Clone, Copy)]
pub struct AppStateMut {
    /// The network every screen queries.
    pub chain: Signal<Chain>,
    pub recent_searches: Signal<RecentSearches>,
    pub theme: Signal<Theme>,
    /// Site visits. `None` until the counter answered.
    pub visits: Signal<Option<u64>>,
    /// Set once the free API notice was shown this session.
    pub api_notice_shown: Signal<bool>,
}
