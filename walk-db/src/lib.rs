//! In-memory lookup layer for walking-survey data.
//!
//! This crate holds the three bundled datasets (site locations, site
//! attributes and per-site observations) in a shared, read-only store and
//! exposes typed query methods for the Dioxus front end.
//!
//! # Architecture
//!
//! - `Rc` wrapper so the store can be cloned freely between components in
//!   single-threaded WASM
//! - JSON data embedded via `include_str!` at compile time in the consuming
//!   crate and parsed once on startup
//! - Nothing is mutated after loading; every query is a pure lookup
//!
//! # Usage
//!
//! ```rust
//! use walk_db::Dataset;
//!
//! let dataset = Dataset::load(
//!     r#"[{"street_section_id": 42, "latitude": -33.87, "longitude": 151.21}]"#,
//!     r#"{"42": {"street_name": "George St", "cross_street_a": "King St", "cross_street_b": "Market St"}}"#,
//!     r#"{"42": [{"date": "2022-09-11", "day_of_week": "Sunday", "time": "07:15:00", "pph": 100, "temperature_apparent": 12.5}]}"#,
//! )
//! .unwrap();
//!
//! assert_eq!(dataset.query_sites().len(), 1);
//! let summary = dataset.query_site_summary(&"42".into()).unwrap();
//! assert_eq!(summary.max_flow, 100);
//! ```

mod loader;
pub mod models;
mod queries;

use std::collections::HashMap;
use std::rc::Rc;
use walk_survey::observation::Observation;
use walk_survey::site::{Site, SiteAttributes, SiteId};

/// Read-only store of every site and observation.
///
/// Cheaply cloneable (via `Rc`); all clones see the same data.
#[derive(Clone)]
pub struct Dataset {
    inner: Rc<DatasetInner>,
}

struct DatasetInner {
    sites: Vec<Site>,
    attributes: HashMap<SiteId, SiteAttributes>,
    observations: HashMap<SiteId, Vec<Observation>>,
}

impl Dataset {
    /// Build a store from already parsed parts.
    pub fn from_parts(
        sites: Vec<Site>,
        attributes: HashMap<SiteId, SiteAttributes>,
        observations: HashMap<SiteId, Vec<Observation>>,
    ) -> Self {
        Self {
            inner: Rc::new(DatasetInner {
                sites,
                attributes,
                observations,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_is_cloneable() {
        let dataset = Dataset::from_parts(Vec::new(), HashMap::new(), HashMap::new());
        let dataset2 = dataset.clone();
        assert!(Rc::ptr_eq(&dataset.inner, &dataset2.inner));
    }

    #[test]
    fn empty_dataset_has_no_sites() {
        let dataset = Dataset::from_parts(Vec::new(), HashMap::new(), HashMap::new());
        assert!(dataset.query_sites().is_empty());
        assert!(dataset.query_observations(&SiteId::from("1")).is_none());
    }
}
