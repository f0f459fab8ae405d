//! `dyncast-xmath` - small math helpers and statistics.
//!
//! Sequence functions accept slices of anything convertible into a
//! [`dyncast::Value`] and read each element with [`dyncast::to_float`], so
//! `["1.5", "2"]` and `[1.5, 2.0]` give the same sum.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Angle unit conversion and rounding.
pub mod float;
/// Integer square root and prime numbers.
pub mod integer;
/// Sums, extrema and means.
pub mod stats;

pub use float::{deg_to_rad, rad_to_deg, round};
pub use integer::{prime, sqrt};
pub use stats::{arithmetic, count, geometric, harmonic, max, median, min, sum};
