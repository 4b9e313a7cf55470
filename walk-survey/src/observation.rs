use crate::site::SiteId;
use anyhow::Context;
use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Date format used in the chart data file: "YYYY-MM-DD"
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Time-of-day format used in the chart data file: "HH:MM:SS"
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// A single pedestrian count taken at a street section.
///
/// Observations carry no site id of their own; the chart data file groups
/// them under the id of the site they were surveyed at.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Observation {
    pub date: NaiveDate,
    /// Day name as written in the source data (e.g. "Sunday")
    pub day_of_week: String,
    pub time: NaiveTime,
    /// People per hour
    pub pph: u32,
    /// Apparent temperature in degrees Celsius
    pub temperature_apparent: f64,
}

impl Observation {
    /// Parse the chart data file: a JSON object mapping each site id to
    /// its array of observations.
    pub fn parse_chart_data_json(
        json: &str,
    ) -> anyhow::Result<HashMap<SiteId, Vec<Observation>>> {
        let chart_data: HashMap<SiteId, Vec<Observation>> =
            serde_json::from_str(json).context("failed to parse chart data")?;
        log::debug!(
            "parsed {} observations across {} street sections",
            chart_data.values().map(Vec::len).sum::<usize>(),
            chart_data.len()
        );
        Ok(chart_data)
    }

    /// "YYYY-MM-DD"
    pub fn date_label(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    /// "HH:MM:SS"
    pub fn time_label(&self) -> String {
        self.time.format(TIME_FORMAT).to_string()
    }

    /// Zero-padded hour of the observation time, e.g. "07".
    pub fn hour_label(&self) -> String {
        self.time.format("%H").to_string()
    }

    pub fn seconds_since_midnight(&self) -> u32 {
        self.time.num_seconds_from_midnight()
    }
}
