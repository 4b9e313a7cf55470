//! Diverging red-yellow-blue color ramp.

use serde::Serialize;
use std::fmt;

/// An opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// "#rrggbb"
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Formats as a CSS `rgb(r, g, b)` value.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// The 11-class RdYlBu scheme (ColorBrewer), red end first.
pub const RD_YL_BU: [Rgb; 11] = [
    Rgb::new(0xa5, 0x00, 0x26),
    Rgb::new(0xd7, 0x30, 0x27),
    Rgb::new(0xf4, 0x6d, 0x43),
    Rgb::new(0xfd, 0xae, 0x61),
    Rgb::new(0xfe, 0xe0, 0x90),
    Rgb::new(0xff, 0xff, 0xbf),
    Rgb::new(0xe0, 0xf3, 0xf8),
    Rgb::new(0xab, 0xd9, 0xe9),
    Rgb::new(0x74, 0xad, 0xd1),
    Rgb::new(0x45, 0x75, 0xb4),
    Rgb::new(0x31, 0x36, 0x95),
];

/// Sample the RdYlBu ramp at `t`, where 0 is the red end and 1 the blue end.
///
/// Each channel follows a uniform cubic B-spline through the scheme's stops,
/// so the ramp passes exactly through the end colors but only approximately
/// through the interior ones. `t` is clamped to `[0, 1]`.
pub fn interpolate_rd_yl_bu(t: f64) -> Rgb {
    interpolate_basis(&RD_YL_BU, t)
}

fn interpolate_basis(stops: &[Rgb], t: f64) -> Rgb {
    let channel = |values: Vec<f64>| basis_spline(&values, t).round().clamp(0.0, 255.0) as u8;
    Rgb::new(
        channel(stops.iter().map(|c| f64::from(c.r)).collect()),
        channel(stops.iter().map(|c| f64::from(c.g)).collect()),
        channel(stops.iter().map(|c| f64::from(c.b)).collect()),
    )
}

fn basis_spline(values: &[f64], t: f64) -> f64 {
    let n = values.len() - 1;
    // NaN falls into the first branch along with t <= 0
    let (i, t) = if !(t > 0.0) {
        (0, 0.0)
    } else if t >= 1.0 {
        (n - 1, 1.0)
    } else {
        ((t * n as f64).floor() as usize, t)
    };
    let v1 = values[i];
    let v2 = values[i + 1];
    let v0 = if i > 0 { values[i - 1] } else { 2.0 * v1 - v2 };
    let v3 = if i < n - 1 { values[i + 2] } else { 2.0 * v2 - v1 };
    basis((t - i as f64 / n as f64) * n as f64, v0, v1, v2, v3)
}

fn basis(t1: f64, v0: f64, v1: f64, v2: f64, v3: f64) -> f64 {
    let t2 = t1 * t1;
    let t3 = t2 * t1;
    ((1.0 - 3.0 * t1 + 3.0 * t2 - t3) * v0
        + (4.0 - 6.0 * t2 + 3.0 * t3) * v1
        + (1.0 + 3.0 * t1 + 3.0 * t2 - 3.0 * t3) * v2
        + t3 * v3)
        / 6.0
}
