//! Prose summary of the selected site's surveys.

use dioxus::prelude::*;
use walk_data::selection::Selection;
use walk_data::summary::describe_selection;
use walk_survey::observation::Observation;

#[derive(Props, Clone, PartialEq)]
pub struct SiteSummaryTextProps {
    pub selection: Selection,
    /// Observations of the selected site
    #[props(default)]
    pub observations: Option<Vec<Observation>>,
}

/// Renders the derived statistics sentence, or the "select a site" prompt
/// (in italics) while nothing is selected.
#[component]
pub fn SiteSummaryText(props: SiteSummaryTextProps) -> Element {
    let text = describe_selection(&props.selection, props.observations.as_deref());
    rsx! {
        div {
            if props.selection.is_selected() {
                p { "{text}" }
            } else {
                p { i { "{text}" } }
            }
        }
    }
}
