//! `dyncast` - total coercions between dynamically-typed values.
//!
//! ```
//! assert_eq!(dyncast::to_int("2.5"), 3);
//! assert_eq!(dyncast::float_from_x_string("1.234,56"), 1234.56);
//! assert!(dyncast::datetime::is_zero_instant(dyncast::to_time("soon")));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

/// Typed coercion functions.
pub mod convert;
/// Timestamp layouts, parsing and rendering.
pub mod datetime;
/// Errors reported by strict coercions.
pub mod error;
/// Dynamic values and the duration type.
pub mod value;

pub use convert::{
    coerce, float_from_x_string, to_bool, to_bytes, to_duration, to_float, to_int, to_string,
    to_time, to_uint, try_bool, try_coerce, try_duration, try_float, try_float_from_x_string,
    try_int, try_time, try_uint, Target,
};
pub use error::CoerceError;
pub use value::{Duration, Value};
