use std::fmt;
use std::sync::Arc;

use smol_str::SmolStr;
use time::OffsetDateTime;

use super::Duration;

/// Capability for values outside the enumerated categories: anything that
/// can render itself as text takes part in coercion through that text.
pub trait AsText {
    fn as_text(&self) -> String;
}

impl<T: fmt::Display + ?Sized> AsText for T {
    fn as_text(&self) -> String {
        self.to_string()
    }
}

/// Dynamically-typed input accepted by every coercion.
#[derive(Clone, Default)]
pub enum Value {
    #[default]
    Nil,
    Bool(bool),

    /// Every signed integer width widens into this.
    Int(i64),
    /// Every unsigned integer width widens into this.
    Uint(u64),

    Float32(f32),
    Float(f64),

    Text(SmolStr),
    Bytes(Vec<u8>),

    Instant(OffsetDateTime),
    Duration(Duration),

    /// Fallback category, coerced through its textual rendering.
    Opaque(Arc<dyn AsText + Send + Sync>),
}

impl Value {
    /// Wraps a value of any other type, coerced through its text.
    pub fn opaque(value: impl AsText + Send + Sync + 'static) -> Self {
        Value::Opaque(Arc::new(value))
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("Nil"),
            Value::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            Value::Int(v) => f.debug_tuple("Int").field(v).finish(),
            Value::Uint(v) => f.debug_tuple("Uint").field(v).finish(),
            Value::Float32(v) => f.debug_tuple("Float32").field(v).finish(),
            Value::Float(v) => f.debug_tuple("Float").field(v).finish(),
            Value::Text(v) => f.debug_tuple("Text").field(v).finish(),
            Value::Bytes(v) => f.debug_tuple("Bytes").field(v).finish(),
            Value::Instant(v) => f.debug_tuple("Instant").field(v).finish(),
            Value::Duration(v) => f.debug_tuple("Duration").field(v).finish(),
            Value::Opaque(v) => f.debug_tuple("Opaque").field(&v.as_text()).finish(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Uint(a), Value::Uint(b)) => a == b,
            (Value::Float32(a), Value::Float32(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            (Value::Instant(a), Value::Instant(b)) => a == b,
            (Value::Duration(a), Value::Duration(b)) => a == b,
            (Value::Opaque(a), Value::Opaque(b)) => a.as_text() == b.as_text(),
            _ => false,
        }
    }
}

macro_rules! from_primitive {
    ($variant:ident($target:ty): $($source:ty),+) => {
        $(
            impl From<$source> for Value {
                fn from(value: $source) -> Self {
                    Value::$variant(value as $target)
                }
            }
        )+
    };
}

from_primitive!(Int(i64): i8, i16, i32, i64, isize);
from_primitive!(Uint(u64): u8, u16, u32, u64, usize);

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float32(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Text(SmolStr::new(value.encode_utf8(&mut [0; 4])))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(SmolStr::new(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(SmolStr::from(value))
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Text(SmolStr::new(value))
    }
}

impl From<SmolStr> for Value {
    fn from(value: SmolStr) -> Self {
        Value::Text(value)
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Bytes(value)
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Value::Bytes(value.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for Value {
    fn from(value: &[u8; N]) -> Self {
        Value::Bytes(value.to_vec())
    }
}

impl From<OffsetDateTime> for Value {
    fn from(value: OffsetDateTime) -> Self {
        Value::Instant(value)
    }
}

impl From<Duration> for Value {
    fn from(value: Duration) -> Self {
        Value::Duration(value)
    }
}

impl From<std::time::Duration> for Value {
    fn from(value: std::time::Duration) -> Self {
        Value::Duration(value.into())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Nil, Into::into)
    }
}

impl From<&Value> for Value {
    fn from(value: &Value) -> Self {
        value.clone()
    }
}
