#![allow(missing_docs)]

use std::f64::consts::PI;

#[must_use]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

#[must_use]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Rounds half away from zero. Out-of-range values saturate, NaN gives 0.
#[must_use]
pub fn round(v: f64) -> i64 {
    if v < 0.0 {
        (v - 0.5).ceil() as i64
    } else {
        (v + 0.5).floor() as i64
    }
}
