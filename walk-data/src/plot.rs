//! Scatter plot configuration and layout.
//!
//! The plot surface and all three scale domains are fixed constants rather
//! than derived from the loaded data, so every site is drawn on the same
//! axes and colors are comparable between sites.

use crate::color::Rgb;
use crate::hover::TooltipAnchor;
use crate::scale::{FlowScale, TemperatureScale, TimeScale};
use crate::ticks::{format_time_tick, linear_ticks, time_ticks};
use serde::Serialize;
use walk_survey::observation::Observation;

pub const PLOT_WIDTH: f64 = 460.0;
pub const PLOT_HEIGHT: f64 = 490.0;

pub const PLOT_MARGIN: Margin = Margin {
    top: 0.0,
    bottom: 30.0,
    left: 0.0,
    right: 20.0,
};

/// Start of the survey window (07:00), seconds since midnight.
pub const TIME_DOMAIN_START: u32 = 7 * 3600;
/// End of the survey window (22:00), seconds since midnight.
pub const TIME_DOMAIN_END: u32 = 22 * 3600;
/// Fraction of the window added before the start and after the end.
pub const TIME_PADDING: f64 = 0.4;

/// Upper bound of the flow axis, people per hour.
pub const MAX_FLOW: f64 = 2400.0;

/// Apparent temperature bounds of the color ramp, degrees Celsius.
pub const MIN_TEMPERATURE: f64 = -2.0;
pub const MAX_TEMPERATURE: f64 = 38.0;

pub const MARK_RADIUS: f64 = 6.0;

/// Vertical distance from a mark to its tooltip.
pub const TOOLTIP_OFFSET: f64 = 30.0;

/// Delay before a tooltip hides once the pointer leaves its mark.
pub const TOOLTIP_HIDE_DELAY_MS: u32 = 300;

pub const FLOW_AXIS_LABEL: &str = "People per hour";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margin {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

/// Everything needed to rebuild the plot's scales and axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlotConfig {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    pub time_domain: (u32, u32),
    pub time_padding: f64,
    pub max_flow: f64,
    pub temperature_domain: (f64, f64),
    pub mark_radius: f64,
    pub tooltip_offset: f64,
    pub hide_delay_ms: u32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: PLOT_WIDTH,
            height: PLOT_HEIGHT,
            margin: PLOT_MARGIN,
            time_domain: (TIME_DOMAIN_START, TIME_DOMAIN_END),
            time_padding: TIME_PADDING,
            max_flow: MAX_FLOW,
            temperature_domain: (MIN_TEMPERATURE, MAX_TEMPERATURE),
            mark_radius: MARK_RADIUS,
            tooltip_offset: TOOLTIP_OFFSET,
            hide_delay_ms: TOOLTIP_HIDE_DELAY_MS,
        }
    }
}

impl PlotConfig {
    pub fn inner_width(&self) -> f64 {
        self.width - self.margin.left - self.margin.right
    }

    pub fn inner_height(&self) -> f64 {
        self.height - self.margin.top - self.margin.bottom
    }

    /// Wider plots get denser time ticks.
    pub fn x_tick_count(&self) -> usize {
        if self.width > 461.0 {
            12
        } else {
            6
        }
    }

    /// Taller plots get denser flow ticks.
    pub fn y_tick_count(&self) -> usize {
        if self.height > 491.0 {
            12
        } else {
            8
        }
    }
}

/// A positioned, colored circle for one observation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterMark {
    /// Index into the observation slice the marks were built from.
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub fill: Rgb,
}

impl ScatterMark {
    pub fn tooltip_anchor(&self, offset: f64) -> TooltipAnchor {
        TooltipAnchor {
            left: self.x,
            top: self.y + offset,
        }
    }
}

/// One labelled tick at `position` pixels along its axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTick {
    pub position: f64,
    pub label: String,
}

/// The scales for one plot configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotLayout {
    pub config: PlotConfig,
    pub time: TimeScale,
    pub flow: FlowScale,
    pub temperature: TemperatureScale,
}

impl PlotLayout {
    pub fn new(config: PlotConfig) -> Self {
        let (start, end) = config.time_domain;
        let (min_temperature, max_temperature) = config.temperature_domain;
        Self {
            time: TimeScale::new(start, end, config.time_padding, config.inner_width()),
            flow: FlowScale::new(config.max_flow, config.inner_height()),
            temperature: TemperatureScale::new(min_temperature, max_temperature),
            config,
        }
    }

    pub fn mark(&self, index: usize, observation: &Observation) -> ScatterMark {
        ScatterMark {
            index,
            x: self.time.x(observation.seconds_since_midnight()),
            y: self.flow.y(observation.pph),
            radius: self.config.mark_radius,
            fill: self.temperature.color(observation.temperature_apparent),
        }
    }

    pub fn marks(&self, observations: &[Observation]) -> Vec<ScatterMark> {
        observations
            .iter()
            .enumerate()
            .map(|(index, observation)| self.mark(index, observation))
            .collect()
    }

    /// Ticks along the bottom (time) axis.
    pub fn x_axis_ticks(&self) -> Vec<AxisTick> {
        let (start, end) = self.time.padded_domain();
        time_ticks(start, end, self.config.x_tick_count())
            .into_iter()
            .map(|seconds| AxisTick {
                position: ((seconds - start) / (end - start) * self.config.inner_width()).round(),
                label: format_time_tick(seconds),
            })
            .collect()
    }

    /// Ticks along the left (flow) axis.
    pub fn y_axis_ticks(&self) -> Vec<AxisTick> {
        let (min, max) = self.flow.domain();
        linear_ticks(min, max, self.config.y_tick_count())
            .into_iter()
            .map(|flow| AxisTick {
                position: self.flow.y_value(flow),
                label: format!("{}", flow),
            })
            .collect()
    }
}

impl Default for PlotLayout {
    fn default() -> Self {
        Self::new(PlotConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::RD_YL_BU;
    use chrono::{NaiveDate, NaiveTime};

    fn observation(time: &str, pph: u32, temperature: f64) -> Observation {
        Observation {
            date: NaiveDate::from_ymd_opt(2022, 9, 11).unwrap(),
            day_of_week: "Sunday".to_string(),
            time: NaiveTime::parse_from_str(time, "%H:%M:%S").unwrap(),
            pph,
            temperature_apparent: temperature,
        }
    }

    #[test]
    fn test_default_config() {
        let config = PlotConfig::default();
        assert_eq!(config.inner_width(), 440.0);
        assert_eq!(config.inner_height(), 460.0);
        assert_eq!(config.x_tick_count(), 6);
        assert_eq!(config.y_tick_count(), 8);
    }

    #[test]
    fn test_tick_counts_grow_with_size() {
        let config = PlotConfig {
            width: 800.0,
            height: 600.0,
            ..PlotConfig::default()
        };
        assert_eq!(config.x_tick_count(), 12);
        assert_eq!(config.y_tick_count(), 12);
    }

    #[test]
    fn test_marks_positions_and_colors() {
        let layout = PlotLayout::default();
        let observations = vec![
            observation("07:15:00", 2400, -2.0),
            observation("12:00:00", 0, 38.0),
        ];
        let marks = layout.marks(&observations);
        assert_eq!(marks.len(), 2);
        assert_eq!(marks[0].index, 0);
        assert_eq!(marks[0].x, 102.0);
        assert_eq!(marks[0].y, 0.0);
        assert_eq!(marks[0].radius, 6.0);
        assert_eq!(marks[0].fill, RD_YL_BU[10]);
        assert_eq!(marks[1].y, 460.0);
        assert_eq!(marks[1].fill, RD_YL_BU[0]);
        assert!(marks[1].x > marks[0].x);
    }

    #[test]
    fn test_tooltip_anchor_sits_below_mark() {
        let layout = PlotLayout::default();
        let mark = layout.mark(0, &observation("12:00:00", 1200, 20.0));
        let anchor = mark.tooltip_anchor(layout.config.tooltip_offset);
        assert_eq!(anchor.left, mark.x);
        assert_eq!(anchor.top, 230.0 + 30.0);
    }

    #[test]
    fn test_axis_ticks() {
        let layout = PlotLayout::default();
        let y_ticks = layout.y_axis_ticks();
        assert_eq!(y_ticks.len(), 13);
        assert_eq!(y_ticks[0].label, "0");
        assert_eq!(y_ticks[0].position, 460.0);
        assert_eq!(y_ticks[12].label, "2400");
        assert_eq!(y_ticks[12].position, 0.0);

        let x_ticks = layout.x_axis_ticks();
        let labels: Vec<&str> = x_ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["06:00", "12:00", "18:00", "00:00"]);
        assert!(x_ticks.windows(2).all(|w| w[0].position < w[1].position));
    }
}
