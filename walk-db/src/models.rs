//! Query result model structs.
//!
//! All structs derive `Serialize` so they can be handed to the Leaflet
//! bridge as JSON from the Dioxus WASM frontend.

use serde::Serialize;
use walk_survey::site::SiteId;

/// A site marker for the map: where to draw it and what its popup says.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SiteMarker {
    pub site_id: SiteId,
    pub latitude: f64,
    pub longitude: f64,
    /// Popup text, e.g. "Street section ID: 42".
    pub popup: String,
}
