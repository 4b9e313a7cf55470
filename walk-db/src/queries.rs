//! Typed lookups against the loaded [`Dataset`].
//!
//! Lookups never fail; a site absent from one of the datasets simply
//! returns `None`.

use crate::models::SiteMarker;
use crate::Dataset;
use walk_data::summary::SiteSummary;
use walk_survey::observation::Observation;
use walk_survey::site::{Site, SiteAttributes, SiteId};

impl Dataset {
    /// All site geometries, in file order.
    pub fn query_sites(&self) -> &[Site] {
        &self.inner.sites
    }

    pub fn query_site_attributes(&self, site_id: &SiteId) -> Option<&SiteAttributes> {
        let attributes = self.inner.attributes.get(site_id);
        if attributes.is_none() {
            log::warn!("query: no attributes for site {}", site_id);
        }
        attributes
    }

    pub fn query_observations(&self, site_id: &SiteId) -> Option<&[Observation]> {
        let observations = self.inner.observations.get(site_id).map(Vec::as_slice);
        log::debug!(
            "query: query_observations({}) returned {} records",
            site_id,
            observations.map_or(0, <[Observation]>::len)
        );
        observations
    }

    /// Derived statistics for one site; `None` if it has no observations.
    pub fn query_site_summary(&self, site_id: &SiteId) -> Option<SiteSummary> {
        self.query_observations(site_id)
            .and_then(SiteSummary::from_observations)
    }

    /// One map marker per site.
    pub fn query_site_markers(&self) -> Vec<SiteMarker> {
        self.inner
            .sites
            .iter()
            .map(|site| SiteMarker {
                site_id: site.site_id.clone(),
                latitude: site.latitude,
                longitude: site.longitude,
                popup: format!("Street section ID: {}", site.site_id),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::Dataset;
    use walk_survey::site::SiteId;

    fn sample_dataset() -> Dataset {
        let locations = r#"[
            {"street_section_id": 42, "latitude": -33.8731, "longitude": 151.2068},
            {"street_section_id": 43, "latitude": -33.8690, "longitude": 151.2070}
        ]"#;
        let attributes = r#"{
            "42": {"street_name": "George St", "cross_street_a": "King St", "cross_street_b": "Market St"},
            "43": {"street_name": "Pitt St", "cross_street_a": "Park St", "cross_street_b": "Bathurst St"}
        }"#;
        let chart_data = r#"{
            "42": [
                {"date": "2022-09-11", "day_of_week": "Sunday", "time": "07:15:00", "pph": 100, "temperature_apparent": 12.5},
                {"date": "2022-09-12", "day_of_week": "Monday", "time": "20:45:00", "pph": 50, "temperature_apparent": 18.0},
                {"date": "2022-09-12", "day_of_week": "Monday", "time": "12:00:00", "pph": 200, "temperature_apparent": 24.0}
            ],
            "43": [
                {"date": "2022-09-13", "day_of_week": "Tuesday", "time": "09:00:00", "pph": 900, "temperature_apparent": 15.0}
            ]
        }"#;
        Dataset::load(locations, attributes, chart_data).unwrap()
    }

    #[test]
    fn query_site_summary_for_selected_site() {
        let dataset = sample_dataset();
        let summary = dataset.query_site_summary(&SiteId::from("42")).unwrap();
        assert_eq!(summary.min_flow, 50);
        assert_eq!(summary.max_flow, 200);
        assert_eq!(summary.unique_dates, 2);
        assert_eq!(summary.unique_days, 2);
        assert_eq!(summary.earliest_hour, "07");
        assert_eq!(summary.latest_hour, 21);
    }

    #[test]
    fn summaries_are_stable_across_selections() {
        let dataset = sample_dataset();
        let a = SiteId::from("42");
        let b = SiteId::from("43");
        let first = dataset.query_site_summary(&a);
        let other = dataset.query_site_summary(&b);
        let again = dataset.query_site_summary(&a);
        assert_eq!(first, again);
        assert_ne!(first, other);
        assert_eq!(other.unwrap().max_flow, 900);
    }

    #[test]
    fn query_observations_only_returns_that_site() {
        let dataset = sample_dataset();
        let observations = dataset.query_observations(&SiteId::from("43")).unwrap();
        assert_eq!(observations.len(), 1);
        assert_eq!(observations[0].pph, 900);
    }

    #[test]
    fn query_missing_site() {
        let dataset = sample_dataset();
        let missing = SiteId::from("999");
        assert!(dataset.query_site_attributes(&missing).is_none());
        assert!(dataset.query_observations(&missing).is_none());
        assert!(dataset.query_site_summary(&missing).is_none());
    }

    #[test]
    fn query_site_markers() {
        let dataset = sample_dataset();
        let markers = dataset.query_site_markers();
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].site_id, SiteId::from(42));
        assert_eq!(markers[0].popup, "Street section ID: 42");
        let json = serde_json::to_string(&markers[0]).unwrap();
        assert!(json.contains("\"site_id\":\"42\""));
    }

    #[test]
    fn query_site_attributes() {
        let dataset = sample_dataset();
        let attributes = dataset.query_site_attributes(&SiteId::from("43")).unwrap();
        assert_eq!(attributes.describe(), "Pitt St between Park St and Bathurst St.");
    }
}
