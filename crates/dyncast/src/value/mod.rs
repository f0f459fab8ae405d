//! Dynamic values and the duration type.

#![allow(missing_docs)]

mod duration;
mod format;
mod types;

pub use duration::*;
pub use format::{format_f32, format_f64};
pub use types::*;
