//! Download links and licence for the underlying open data.

use crate::config::{DATASET_CSV_URL, DATASET_PARQUET_URL, LICENCE_URL};
use dioxus::prelude::*;

#[component]
pub fn DatasetInfo() -> Element {
    rsx! {
        div {
            p {
                "The entire dataset, including disaggregations by footpath and direction, is available to download as "
                a { href: DATASET_CSV_URL, "csv" }
                " or "
                a { href: DATASET_PARQUET_URL, "parquet" }
                " files as open data under a "
                a { href: LICENCE_URL, target: "_blank", "Creative Commons Attribution 4.0" }
                " licence."
            }
        }
    }
}
