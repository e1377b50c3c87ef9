//! Test data generation utilities.
//!
//! Builders for the grids and profiles used by the integration tests.

#![allow(dead_code)]

/// A strictly increasing grid with irregular spacing
pub fn irregular_grid(count: usize, start: f64) -> Vec<f64> {
    let mut x = start;
    (0..count)
        .map(|k| {
            let current = x;
            x += 0.5 + ((k * 7) % 5) as f64 * 0.75;
            current
        })
        .collect()
}

/// A deterministic, unsorted set of query points covering `[lo, hi]` and a
/// margin on both sides
pub fn scattered_points(count: usize, lo: f64, hi: f64) -> Vec<f64> {
    let span = hi - lo;
    (0..count)
        .map(|k| {
            let t = ((k * 37) % 101) as f64 / 100.0;
            lo - 0.25 * span + 1.5 * span * t
        })
        .collect()
}

/// Ice levels refined near the base, as used for temperature columns
pub fn stretched_ice_levels(lz: f64, count: usize) -> Vec<f64> {
    let mut levels: Vec<f64> = (0..count)
        .map(|k| {
            let s = k as f64 / (count - 1) as f64;
            lz * s * s
        })
        .collect();
    levels[count - 1] = lz;
    levels
}

/// A smooth temperature-like profile with curvature (Kelvin)
pub fn temperature_profile(z: f64) -> f64 {
    263.15 + 10.0 * (-z / 800.0).exp()
}

/// Twelve mid-month times over one 365-day year
pub fn mid_month_times() -> Vec<f64> {
    let month = regrid::forcing::SECONDS_PER_YEAR / 12.0;
    (0..12).map(|m| (m as f64 + 0.5) * month).collect()
}
