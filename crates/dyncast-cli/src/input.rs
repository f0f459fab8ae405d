//! Turning command-line arguments into dynamic values.

use anyhow::Context;
use dyncast::Value;

/// Plain arguments are text.
pub fn text_value(arg: &str) -> Value {
    Value::from(arg)
}

/// JSON scalars map onto the matching value category; arrays and objects
/// are passed on as their JSON text.
pub fn json_value(arg: &str) -> anyhow::Result<Value> {
    let json: serde_json::Value =
        serde_json::from_str(arg).with_context(|| format!("input '{arg}' is not JSON"))?;
    Ok(json_to_value(&json))
}

fn json_to_value(json: &serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Nil,
        serde_json::Value::Bool(value) => Value::Bool(*value),
        serde_json::Value::Number(number) => {
            if let Some(value) = number.as_i64() {
                Value::Int(value)
            } else if let Some(value) = number.as_u64() {
                Value::Uint(value)
            } else {
                number.as_f64().map_or(Value::Nil, Value::Float)
            }
        }
        serde_json::Value::String(value) => Value::from(value.as_str()),
        other @ (serde_json::Value::Array(_) | serde_json::Value::Object(_)) => {
            Value::from(other.to_string())
        }
    }
}
