use std::fmt;
use std::str::FromStr;

use smol_str::SmolStr;

use crate::error::CoerceError;
use crate::value::Value;

/// Result type of a coercion chosen at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Bool,
    Bytes,
    Duration,
    Float,
    Int,
    Uint,
    String,
    Time,
}

impl Target {
    pub const ALL: [Target; 8] = [
        Target::Bool,
        Target::Bytes,
        Target::Duration,
        Target::Float,
        Target::Int,
        Target::Uint,
        Target::String,
        Target::Time,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Target::Bool => "bool",
            Target::Bytes => "bytes",
            Target::Duration => "duration",
            Target::Float => "float",
            Target::Int => "int",
            Target::Uint => "uint",
            Target::String => "string",
            Target::Time => "time",
        }
    }

    /// Accepts the target name in any case, optionally prefixed with `to_`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        let bare = lower.strip_prefix("to_").unwrap_or(&lower);
        Self::ALL.into_iter().find(|target| target.name() == bare)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown target name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown coercion target '{0}'")]
pub struct UnknownTarget(pub SmolStr);

impl FromStr for Target {
    type Err = UnknownTarget;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Target::from_name(s).ok_or_else(|| UnknownTarget(SmolStr::new(s)))
    }
}

/// Coerces `value` to `target`, wrapping the result back into a [`Value`].
#[must_use]
pub fn coerce(value: impl Into<Value>, target: Target) -> Value {
    let value = value.into();
    match target {
        Target::Bool => Value::Bool(super::to_bool(&value)),
        Target::Bytes => Value::Bytes(super::to_bytes(&value)),
        Target::Duration => Value::Duration(super::to_duration(&value)),
        Target::Float => Value::Float(super::to_float(&value)),
        Target::Int => Value::Int(super::to_int(&value)),
        Target::Uint => Value::Uint(super::to_uint(&value)),
        Target::String => Value::Text(SmolStr::from(super::to_string(&value))),
        Target::Time => Value::Instant(super::to_time(&value)),
    }
}

/// Strict counterpart of [`coerce`]. Bytes and strings always succeed.
pub fn try_coerce(value: impl Into<Value>, target: Target) -> Result<Value, CoerceError> {
    let value = value.into();
    Ok(match target {
        Target::Bool => Value::Bool(super::try_bool(&value)?),
        Target::Bytes => Value::Bytes(super::to_bytes(&value)),
        Target::Duration => Value::Duration(super::try_duration(&value)?),
        Target::Float => Value::Float(super::try_float(&value)?),
        Target::Int => Value::Int(super::try_int(&value)?),
        Target::Uint => Value::Uint(super::try_uint(&value)?),
        Target::String => Value::Text(SmolStr::from(super::to_string(&value))),
        Target::Time => Value::Instant(super::try_time(&value)?),
    })
}
