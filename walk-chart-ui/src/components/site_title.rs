//! Italic heading naming the selected street section.

use dioxus::prelude::*;
use walk_survey::site::SiteAttributes;

#[derive(Props, Clone, PartialEq)]
pub struct SiteTitleProps {
    pub attributes: SiteAttributes,
}

#[component]
pub fn SiteTitle(props: SiteTitleProps) -> Element {
    let description = props.attributes.describe();
    rsx! {
        p {
            i { "{description}" }
        }
    }
}
