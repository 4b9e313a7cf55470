//! Placeholder for the detail pane while the datasets are parsed.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LoadingSpinnerProps {
    #[props(default = "Loading survey data...".to_string())]
    pub label: String,
}

#[component]
pub fn LoadingSpinner(props: LoadingSpinnerProps) -> Element {
    rsx! {
        div {
            "aria-busy": "true",
            style: "display: flex; justify-content: center; align-items: center; min-height: 120px; color: #666; font-style: italic;",
            "{props.label}"
        }
    }
}
