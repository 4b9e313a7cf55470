//! Derived statistics and descriptive text for a selected street section.

use crate::selection::Selection;
use chrono::Timelike;
use std::collections::HashSet;
use walk_survey::observation::Observation;

/// Shown in the detail pane before any site has been picked.
pub const SELECT_SITE_PROMPT: &str = "Select a street section by clicking on a green circle marker \
on the map to view more information about walking movements at that site.";

/// Shown for a selected site that has no observations.
pub const NO_OBSERVATIONS_TEXT: &str = "No walking surveys have been recorded for this street section.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSummary {
    pub min_flow: u32,
    pub max_flow: u32,
    pub unique_dates: usize,
    pub unique_days: usize,
    /// Zero-padded hour of the earliest observation, e.g. "07".
    pub earliest_hour: String,
    /// Hour after the latest observation, the exclusive end of the survey
    /// window (a last count at 20:45 gives 21).
    pub latest_hour: u32,
}

impl SiteSummary {
    /// `None` when there are no observations to summarize.
    pub fn from_observations(observations: &[Observation]) -> Option<SiteSummary> {
        let min_flow = observations.iter().map(|o| o.pph).min()?;
        let max_flow = observations.iter().map(|o| o.pph).max()?;
        let unique_dates = observations
            .iter()
            .map(|o| o.date)
            .collect::<HashSet<_>>()
            .len();
        let unique_days = observations
            .iter()
            .map(|o| o.day_of_week.as_str())
            .collect::<HashSet<_>>()
            .len();
        let earliest = observations.iter().map(|o| o.time).min()?;
        let latest = observations.iter().map(|o| o.time).max()?;
        Some(SiteSummary {
            min_flow,
            max_flow,
            unique_dates,
            unique_days,
            earliest_hour: earliest.format("%H").to_string(),
            latest_hour: latest.hour() + 1,
        })
    }

    /// The plural suffix for both "date" and "day" follows the number of
    /// distinct dates.
    pub fn sentence(&self) -> String {
        let plural = if self.unique_dates > 1 { "s" } else { "" };
        format!(
            "Between {} and {} people per hour have been surveyed walking through this street \
             section. Surveys have been undertaken across {} date{}, including {} day{} of the \
             week, between the hours of {}:00 and {}:00.",
            self.min_flow,
            self.max_flow,
            self.unique_dates,
            plural,
            self.unique_days,
            plural,
            self.earliest_hour,
            self.latest_hour,
        )
    }
}

/// Detail pane text for the current selection. `observations` are those of
/// the selected site, if any.
pub fn describe_selection(selection: &Selection, observations: Option<&[Observation]>) -> String {
    if !selection.is_selected() {
        return SELECT_SITE_PROMPT.to_string();
    }
    observations
        .and_then(SiteSummary::from_observations)
        .map(|summary| summary.sentence())
        .unwrap_or_else(|| NO_OBSERVATIONS_TEXT.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use walk_survey::site::SiteId;

    fn observation(date: &str, day: &str, time: &str, pph: u32) -> Observation {
        Observation {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            day_of_week: day.to_string(),
            time: NaiveTime::parse_from_str(time, "%H:%M:%S").unwrap(),
            pph,
            temperature_apparent: 20.0,
        }
    }

    fn sample() -> Vec<Observation> {
        vec![
            observation("2022-09-11", "Sunday", "07:15:00", 100),
            observation("2022-09-12", "Monday", "20:45:00", 50),
            observation("2022-09-12", "Monday", "12:00:00", 200),
        ]
    }

    #[test]
    fn test_summary_statistics() {
        let summary = SiteSummary::from_observations(&sample()).unwrap();
        assert_eq!(
            summary,
            SiteSummary {
                min_flow: 50,
                max_flow: 200,
                unique_dates: 2,
                unique_days: 2,
                earliest_hour: "07".to_string(),
                latest_hour: 21,
            }
        );
    }

    #[test]
    fn test_sentence_uses_plurals() {
        let summary = SiteSummary::from_observations(&sample()).unwrap();
        assert_eq!(
            summary.sentence(),
            "Between 50 and 200 people per hour have been surveyed walking through this street \
             section. Surveys have been undertaken across 2 dates, including 2 days of the week, \
             between the hours of 07:00 and 21:00."
        );
    }

    #[test]
    fn test_day_plural_follows_date_count() {
        // One date but the day name appears twice with different spellings
        let observations = vec![
            observation("2022-09-11", "Sunday", "09:00:00", 10),
            observation("2022-09-11", "Sun", "10:30:00", 20),
        ];
        let sentence = SiteSummary::from_observations(&observations)
            .unwrap()
            .sentence();
        assert!(sentence.contains("across 1 date, including 2 day of the week"));
        assert!(sentence.contains("between the hours of 09:00 and 11:00."));
    }

    #[test]
    fn test_empty_observations() {
        assert_eq!(SiteSummary::from_observations(&[]), None);
        let selected = Selection::Selected(SiteId::from("9"));
        assert_eq!(describe_selection(&selected, Some(&[])), NO_OBSERVATIONS_TEXT);
        assert_eq!(describe_selection(&selected, None), NO_OBSERVATIONS_TEXT);
    }

    #[test]
    fn test_unselected_prompt() {
        let observations = sample();
        assert_eq!(
            describe_selection(&Selection::Unselected, Some(&observations)),
            SELECT_SITE_PROMPT
        );
    }

    #[test]
    fn test_latest_hour_is_not_zero_padded() {
        let observations = vec![observation("2022-09-11", "Sunday", "07:45:00", 10)];
        let summary = SiteSummary::from_observations(&observations).unwrap();
        assert_eq!(summary.earliest_hour, "07");
        assert_eq!(summary.latest_hour, 8);
        assert!(summary.sentence().ends_with("between the hours of 07:00 and 8:00."));
    }
}
