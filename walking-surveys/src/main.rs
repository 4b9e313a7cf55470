//! Walking surveys
//!
//! A map of surveyed street sections in central Sydney. Clicking a marker
//! opens the detail pane for that section: its street name, a scatter plot
//! of pedestrian counts by time of day (colored by apparent temperature)
//! and a short summary of when and how often it was surveyed.
//!
//! Data flow:
//! 1. `build.rs` copies the three JSON datasets from `fixtures/` into `OUT_DIR`.
//! 2. `include_str!` embeds them into the WASM binary.
//! 3. On mount, they are parsed into a read-only `walk_db::Dataset`.
//! 4. Marker clicks update `AppState::selection`; the detail pane re-renders
//!    from the dataset for the selected site.

use dioxus::prelude::*;
use walk_chart_ui::components::{DatasetInfo, ErrorDisplay, LoadingSpinner, SiteDetail, SiteMap};
use walk_chart_ui::config::{LEAFLET_CSS, LEAFLET_JS, PAGE_TITLE};
use walk_chart_ui::state::AppState;
use walk_db::Dataset;

/// Site geometries.
const STREET_LOCATIONS_JSON: &str =
    include_str!(concat!(env!("OUT_DIR"), "/street_locations.json"));
/// Street names per site.
const STREET_ATTRIBUTES_JSON: &str =
    include_str!(concat!(env!("OUT_DIR"), "/street_attributes.json"));
/// Observations per site.
const CHART_DATA_JSON: &str = include_str!(concat!(env!("OUT_DIR"), "/chart_data.json"));

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("walking-surveys-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Parse the bundled datasets on mount
    use_effect(move || {
        match Dataset::load(STREET_LOCATIONS_JSON, STREET_ATTRIBUTES_JSON, CHART_DATA_JSON) {
            Ok(dataset) => {
                state.dataset.set(Some(dataset));
            }
            Err(e) => {
                log::error!("Failed to load survey data: {:#}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to load survey data: {:#}", e)));
            }
        }
        state.loading.set(false);
    });

    let markers = (state.dataset)()
        .map(|dataset| dataset.query_site_markers())
        .unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: LEAFLET_CSS }
        document::Script { src: LEAFLET_JS }

        div {
            class: "App",
            style: "display: flex; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            div {
                style: "flex: 1 1 auto; min-width: 0;",
                if !(state.loading)() && (state.error_msg)().is_none() {
                    SiteMap { markers }
                }
            }

            div {
                id: "visualisation-pane",
                style: "flex: 0 0 500px; height: 100vh; overflow-y: auto; box-sizing: border-box;",
                div {
                    id: "visualisation-pane-content",
                    style: "padding: 16px 20px;",
                    h1 { "{PAGE_TITLE}" }

                    if let Some(err) = (state.error_msg)() {
                        ErrorDisplay { message: err }
                    } else if (state.loading)() {
                        LoadingSpinner {}
                    } else {
                        SiteDetail {}
                    }

                    DatasetInfo {}
                }
            }
        }
    }
}
