//! Leaflet map with one clickable marker per street section.

use crate::config::MapConfig;
use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;
use walk_db::models::SiteMarker;
use walk_survey::site::SiteId;

/// DOM id Leaflet renders into.
pub const MAP_CONTAINER_ID: &str = "map-pane";

#[derive(Props, Clone, PartialEq)]
pub struct SiteMapProps {
    pub markers: Vec<SiteMarker>,
    #[props(default)]
    pub config: MapConfig,
}

/// Renders the site markers and feeds marker clicks into the selection.
#[component]
pub fn SiteMap(props: SiteMapProps) -> Element {
    let mut state = use_context::<AppState>();
    let markers = props.markers.clone();
    let config = props.config;

    use_hook(js_bridge::init_map_script);

    use_effect(move || {
        log::debug!("site_map: rendering {} markers", markers.len());
        let mut clicks = js_bridge::render_site_map(MAP_CONTAINER_ID, &markers, &config);
        spawn(async move {
            while let Ok(site_id) = clicks.recv::<String>().await {
                state.select_site(SiteId::from(site_id));
            }
            log::debug!("site_map: click channel closed");
        });
    });

    use_drop(|| js_bridge::destroy_site_map(MAP_CONTAINER_ID));

    rsx! {
        div {
            id: MAP_CONTAINER_ID,
            style: "height: 100vh; width: 100%;",
        }
    }
}
