//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use walk_data::selection::{Selection, SelectionEvent};
use walk_db::Dataset;
use walk_survey::site::SiteId;

/// Shared application state for the walking-survey app.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Loaded datasets (None until loaded)
    pub dataset: Signal<Option<Dataset>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Street section shown in the detail pane
    pub selection: Signal<Selection>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            dataset: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            selection: Signal::new(Selection::Unselected),
        }
    }

    /// Apply a marker click to the selection.
    pub fn select_site(&mut self, site_id: SiteId) {
        let next = self
            .selection
            .peek()
            .apply(SelectionEvent::MarkerClicked(site_id));
        log::info!("selection: {:?}", next);
        self.selection.set(next);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
