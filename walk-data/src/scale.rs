//! Linear scales from data domains onto the plot surface.

use crate::color::{interpolate_rd_yl_bu, Rgb};

/// Continuous linear mapping of `domain` onto `range`, optionally rounded
/// to whole pixels.
///
/// Inputs outside the domain are extrapolated, not clamped. A degenerate
/// domain maps every input onto the middle of the range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
    round: bool,
}

impl LinearScale {
    pub const fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain,
            range,
            round: false,
        }
    }

    /// Round every output to the nearest integer.
    pub const fn rounded(mut self) -> Self {
        self.round = true;
        self
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span == 0.0 { 0.5 } else { (value - d0) / span };
        let out = r0 + t * (r1 - r0);
        if self.round {
            out.round()
        } else {
            out
        }
    }
}

/// Time-of-day scale: seconds since midnight onto `[0, width]`.
///
/// The configured window is widened by `padding * span` on both ends before
/// mapping, so the first and last survey hours sit away from the plot edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    linear: LinearScale,
}

impl TimeScale {
    pub fn new(start_secs: u32, end_secs: u32, padding: f64, width: f64) -> Self {
        let start = f64::from(start_secs);
        let end = f64::from(end_secs);
        let pad = (end - start) * padding;
        Self {
            linear: LinearScale::new((start - pad, end + pad), (0.0, width)).rounded(),
        }
    }

    /// The padded domain, in seconds since midnight. May extend below zero
    /// or past 24:00.
    pub fn padded_domain(&self) -> (f64, f64) {
        self.linear.domain()
    }

    pub fn x(&self, seconds_since_midnight: u32) -> f64 {
        self.linear.apply(f64::from(seconds_since_midnight))
    }
}

/// Flow scale: people per hour onto an inverted vertical pixel range, so
/// larger flows render higher.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowScale {
    linear: LinearScale,
}

impl FlowScale {
    pub fn new(max_flow: f64, height: f64) -> Self {
        Self {
            linear: LinearScale::new((0.0, max_flow), (height, 0.0)).rounded(),
        }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.linear.domain()
    }

    pub fn y(&self, pph: u32) -> f64 {
        self.y_value(f64::from(pph))
    }

    pub fn y_value(&self, flow: f64) -> f64 {
        self.linear.apply(flow)
    }
}

/// Temperature scale: apparent temperature onto the inverted unit interval,
/// then through the red-yellow-blue ramp (hot is red, cold is blue).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureScale {
    linear: LinearScale,
}

impl TemperatureScale {
    pub fn new(min_temperature: f64, max_temperature: f64) -> Self {
        Self {
            linear: LinearScale::new((min_temperature, max_temperature), (1.0, 0.0)),
        }
    }

    pub fn normalized(&self, temperature: f64) -> f64 {
        self.linear.apply(temperature)
    }

    pub fn color(&self, temperature: f64) -> Rgb {
        interpolate_rd_yl_bu(self.normalized(temperature))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::RD_YL_BU;

    const HOUR: u32 = 3600;

    #[test]
    fn test_linear_scale_rounding() {
        let scale = LinearScale::new((0.0, 3.0), (0.0, 10.0));
        assert!((scale.apply(1.0) - 10.0 / 3.0).abs() < 1e-9);
        assert_eq!(scale.rounded().apply(1.0), 3.0);
        assert_eq!(scale.rounded().apply(2.0), 7.0);
    }

    #[test]
    fn test_linear_scale_extrapolates() {
        let scale = LinearScale::new((0.0, 10.0), (0.0, 100.0));
        assert_eq!(scale.apply(-1.0), -10.0);
        assert_eq!(scale.apply(20.0), 200.0);
    }

    #[test]
    fn test_degenerate_domain_maps_to_midpoint() {
        let scale = LinearScale::new((5.0, 5.0), (0.0, 100.0));
        assert_eq!(scale.apply(5.0), 50.0);
        assert_eq!(scale.apply(-40.0), 50.0);
    }

    #[test]
    fn test_time_scale_padding() {
        let scale = TimeScale::new(7 * HOUR, 22 * HOUR, 0.4, 440.0);
        // 15 hour window widened by 6 hours either side
        assert_eq!(
            scale.padded_domain(),
            (f64::from(HOUR), f64::from(28 * HOUR))
        );
        assert_eq!(scale.x(HOUR), 0.0);
        assert_eq!(scale.x(7 * HOUR + 15 * 60), 102.0);
    }

    #[test]
    fn test_time_scale_is_increasing_over_window() {
        let scale = TimeScale::new(7 * HOUR, 22 * HOUR, 0.4, 440.0);
        let mut previous = scale.x(7 * HOUR);
        // Sampled at one minute steps; adjacent minutes may share a rounded pixel
        for secs in (7 * HOUR + 60..22 * HOUR).step_by(60) {
            let x = scale.x(secs);
            assert!(x >= previous, "x must not decrease at {secs}s");
            previous = x;
        }
        assert!(scale.x(7 * HOUR) < scale.x(12 * HOUR));
        assert!(scale.x(12 * HOUR) < scale.x(22 * HOUR - 1));
    }

    #[test]
    fn test_flow_scale_is_inverted() {
        let scale = FlowScale::new(2400.0, 460.0);
        assert_eq!(scale.y(0), 460.0);
        assert_eq!(scale.y(2400), 0.0);
        assert_eq!(scale.y(1200), 230.0);
        let mut previous = scale.y(0);
        for pph in (0..=2400).step_by(10) {
            let y = scale.y(pph);
            assert!(y <= previous, "y must not increase at {pph} pph");
            previous = y;
        }
    }

    #[test]
    fn test_temperature_scale_extremes_and_midpoint() {
        let scale = TemperatureScale::new(-2.0, 38.0);
        assert_eq!(scale.normalized(-2.0), 1.0);
        assert_eq!(scale.normalized(38.0), 0.0);
        assert_eq!(scale.normalized(18.0), 0.5);
        assert_eq!(scale.color(-2.0), RD_YL_BU[10]);
        assert_eq!(scale.color(38.0), RD_YL_BU[0]);
        assert_eq!(scale.color(18.0), interpolate_rd_yl_bu(0.5));
    }

    #[test]
    fn test_temperature_outside_domain_uses_ramp_ends() {
        let scale = TemperatureScale::new(-2.0, 38.0);
        assert!(scale.normalized(45.0) < 0.0);
        assert_eq!(scale.color(45.0), RD_YL_BU[0]);
        assert_eq!(scale.color(-10.0), RD_YL_BU[10]);
    }
}
