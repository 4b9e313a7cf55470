//! Detail pane contents for the current selection.

use crate::components::{ScatterPlot, SiteSummaryText, SiteTitle};
use crate::state::AppState;
use dioxus::prelude::*;

/// Title, scatter plot and summary text for the selected site. Only the
/// summary text renders while nothing is selected.
#[component]
pub fn SiteDetail() -> Element {
    let state = use_context::<AppState>();
    let selection = (state.selection)();
    let dataset = state.dataset.read().clone();

    let site = selection.site_id().cloned();
    let (attributes, observations) = match (&dataset, &site) {
        (Some(dataset), Some(site_id)) => (
            dataset.query_site_attributes(site_id).cloned(),
            dataset.query_observations(site_id).map(<[_]>::to_vec),
        ),
        _ => (None, None),
    };
    let plot_key = site.map(|id| id.to_string()).unwrap_or_default();
    let plot_observations = observations.clone();

    rsx! {
        if let Some(attributes) = attributes {
            SiteTitle { attributes }
        }
        if let Some(observations) = plot_observations {
            ScatterPlot { key: "{plot_key}", observations }
        }
        SiteSummaryText { selection, observations }
    }
}
