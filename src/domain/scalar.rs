//! Scalar inspection helpers for raw configuration values.

use serde_yaml::Value;

/// Lenient integer coercion applied to numeric settings.
///
/// Accepts integers, floats (truncated toward zero), and strings that parse
/// as a base-10 integer after trimming. Everything else is rejected.
pub fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_u64().and_then(|n| i64::try_from(n).ok()))
            .or_else(|| number.as_f64().map(|f| f as i64)),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// YAML type name used in type-mismatch messages.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

/// Render a scalar for inclusion in a message. Non-scalar values fall back
/// to their type name.
pub fn display(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.clone(),
        other => type_name(other).to_string(),
    }
}

/// Render a scalar for the summary, with `N/A` standing in for null.
pub fn display_or_na(value: &Value) -> String {
    match value {
        Value::Null => "N/A".to_string(),
        other => display(other),
    }
}
