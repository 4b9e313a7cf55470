//! Load failure notice for the detail pane.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    /// Full error chain, already formatted
    pub message: String,
    /// Shown above the message
    #[props(default = "The walking survey data could not be loaded.".to_string())]
    pub heading: String,
}

/// Replaces the site detail when the bundled datasets fail to parse. The map
/// is not rendered in that case either.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            p { style: "margin: 0 0 6px 0;", strong { "{props.heading}" } }
            p { style: "margin: 0; font-size: 0.85rem; font-family: monospace;", "{props.message}" }
        }
    }
}
