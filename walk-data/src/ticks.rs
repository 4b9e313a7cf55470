//! Axis tick generation.

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Candidate spacings for time-of-day ticks, in seconds.
const TIME_TICK_STEPS: [f64; 12] = [
    1.0, 5.0, 15.0, 30.0, 60.0, 300.0, 900.0, 1800.0, 3600.0, 10_800.0, 21_600.0, 43_200.0,
];

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Roughly `count` evenly spaced "nice" values (multiples of 1, 2 or 5
/// times a power of ten) covering `[start, stop]`.
pub fn linear_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let (lo, hi) = if stop < start { (stop, start) } else { (start, stop) };
    let mut ticks = tick_spec(lo, hi, count as f64)
        .map(|(i1, i2, inc)| {
            (i1..=i2)
                .map(|i| {
                    if inc < 0.0 {
                        i as f64 / -inc
                    } else {
                        i as f64 * inc
                    }
                })
                .collect::<Vec<f64>>()
        })
        .unwrap_or_default();
    if stop < start {
        ticks.reverse();
    }
    ticks
}

/// Returns `(first index, last index, increment)`; a negative increment
/// means the step is `1 / -inc`, which keeps fractional steps exact.
fn tick_spec(start: f64, stop: f64, count: f64) -> Option<(i64, i64, f64)> {
    let step = (stop - start) / count;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let scale = 10f64.powf(-power) / factor;
        i1 = (start * scale).round() as i64;
        i2 = (stop * scale).round() as i64;
        if (i1 as f64) / scale < start {
            i1 += 1;
        }
        if (i2 as f64) / scale > stop {
            i2 -= 1;
        }
        inc = -scale;
    } else {
        inc = 10f64.powf(power) * factor;
        i1 = (start / inc).round() as i64;
        i2 = (stop / inc).round() as i64;
        if (i1 as f64) * inc < start {
            i1 += 1;
        }
        if (i2 as f64) * inc > stop {
            i2 -= 1;
        }
    }
    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i2 >= i1).then_some((i1, i2, inc))
}

/// Tick positions for a time-of-day axis, in seconds since midnight.
///
/// Picks whichever of the standard clock spacings (seconds through twelve
/// hours) is closest to `span / count` and returns every multiple of it
/// inside `[start, stop]`. Spans too wide for a twelve hour step fall back
/// to whole days.
pub fn time_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !(stop > start) {
        return Vec::new();
    }
    let target = (stop - start) / count as f64;
    let upper = TIME_TICK_STEPS.partition_point(|&step| step <= target);
    let step = if upper == 0 {
        TIME_TICK_STEPS[0]
    } else if upper == TIME_TICK_STEPS.len() {
        if target / TIME_TICK_STEPS[upper - 1] < SECONDS_PER_DAY / target {
            TIME_TICK_STEPS[upper - 1]
        } else {
            SECONDS_PER_DAY
        }
    } else if target / TIME_TICK_STEPS[upper - 1] < TIME_TICK_STEPS[upper] / target {
        TIME_TICK_STEPS[upper - 1]
    } else {
        TIME_TICK_STEPS[upper]
    };
    let first = (start / step).ceil() as i64;
    let last = (stop / step).floor() as i64;
    (first..=last).map(|i| i as f64 * step).collect()
}

/// "HH:MM" label for a time tick. Offsets outside a single day wrap around
/// the clock.
pub fn format_time_tick(seconds: f64) -> String {
    let total_minutes = (seconds / 60.0).round() as i64;
    let minutes_of_day = total_minutes.rem_euclid(24 * 60);
    format!("{:02}:{:02}", minutes_of_day / 60, minutes_of_day % 60)
}
