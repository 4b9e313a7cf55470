//! Parsing the bundled JSON datasets into a [`Dataset`].
//!
//! # JSON Formats
//!
//! - **Street locations**: `[{street_section_id, latitude, longitude}, ...]`
//! - **Street attributes**: `{site_id: {street_name, cross_street_a, cross_street_b}, ...}`
//! - **Chart data**: `{site_id: [{date, day_of_week, time, pph, temperature_apparent}, ...], ...}`

use crate::Dataset;
use anyhow::Context;
use walk_survey::observation::Observation;
use walk_survey::site::{Site, SiteAttributes};

impl Dataset {
    /// Parse all three datasets and build the store.
    ///
    /// Input is trusted to be complete: sites referenced by one file but
    /// missing from another are loaded as-is and only show up as empty
    /// lookups later.
    pub fn load(
        locations_json: &str,
        attributes_json: &str,
        chart_data_json: &str,
    ) -> anyhow::Result<Self> {
        let sites = Site::parse_locations_json(locations_json)
            .context("loading street_locations.json")?;
        let attributes = SiteAttributes::parse_attributes_json(attributes_json)
            .context("loading street_attributes.json")?;
        let observations = Observation::parse_chart_data_json(chart_data_json)
            .context("loading chart_data.json")?;

        log::info!(
            "loader: loaded {} sites, {} attribute records, {} observations",
            sites.len(),
            attributes.len(),
            observations.values().map(Vec::len).sum::<usize>()
        );
        Ok(Self::from_parts(sites, attributes, observations))
    }
}
