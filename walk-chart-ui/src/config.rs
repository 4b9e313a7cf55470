//! Map and page constants.

use serde::Serialize;

/// Leaflet assets, loaded into the document head.
pub const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
pub const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

/// Open data downloads and their licence.
pub const DATASET_CSV_URL: &str =
    "https://public-life-observations.s3.ap-southeast-2.amazonaws.com/datasets_csv.zip";
pub const DATASET_PARQUET_URL: &str =
    "https://public-life-observations.s3.ap-southeast-2.amazonaws.com/datasets_parquet.zip";
pub const LICENCE_URL: &str = "https://creativecommons.org/licenses/by/4.0/legalcode";

pub const PAGE_TITLE: &str = "Walking surveys";

/// Leaflet map setup. Serialized as-is for `renderSiteMap` in `site-map.js`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapConfig {
    pub center_latitude: f64,
    pub center_longitude: f64,
    pub zoom: u8,
    pub zoom_control: bool,
    pub tile_url: &'static str,
    pub attribution: &'static str,
    pub marker_radius: f64,
    pub marker_fill: &'static str,
    pub marker_fill_opacity: f64,
    pub marker_weight: f64,
}

impl Default for MapConfig {
    /// Central Sydney on the CARTO light basemap.
    fn default() -> Self {
        Self {
            center_latitude: -33.87319087719761,
            center_longitude: 151.20681949733816,
            zoom: 13,
            zoom_control: false,
            tile_url: "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png",
            attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OSM</a> contributors, <a href=\"https://carto.com/attributions\">CARTO</a>",
            marker_radius: 6.0,
            marker_fill: "#009800",
            marker_fill_opacity: 0.8,
            marker_weight: 0.0,
        }
    }
}
