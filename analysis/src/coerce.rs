//! Best-effort extraction of primitive values from loosely typed JSON.
//!
//! None of these functions fail, missing or malformed data collapses into the
//! supplied fallback or an empty string.

use serde_json::Value;

/// The numeric interpretation of `value` if it is finite, otherwise `fallback`.
pub fn to_number(value: Option<&Value>, fallback: f64) -> f64 {
    let number = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                trimmed.parse::<f64>().ok()
            }
        }
        Some(Value::Bool(b)) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    };

    number.filter(|n| n.is_finite()).unwrap_or(fallback)
}

/// Like [`to_number`] but only accepts values that really carry a number.
pub fn as_number(value: Option<&Value>) -> Option<f64> {
    let number = to_number(value, f64::NAN);
    number.is_finite().then_some(number)
}

/// Trimmed text of a string or number, empty for everything else.
pub fn to_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.trim().to_owned(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// The first key of `keys` whose value on `object` has non-empty text.
///
/// Keys are tried in order and the first hit wins, nothing is merged.
pub fn first_text(object: &Value, keys: &[&str]) -> String {
    keys.iter()
        .map(|key| to_text(object.get(key)))
        .find(|text| !text.is_empty())
        .unwrap_or_default()
}

/// The first key of `keys` that is present and not `null` on `object`.
pub fn first_present<'v>(object: &'v Value, keys: &[&str]) -> Option<&'v Value> {
    keys.iter()
        .filter_map(|key| object.get(key))
        .find(|value| !value.is_null())
}

/// Display name of a player entry, either a plain string or an object.
pub fn extract_name(value: &Value) -> String {
    match value {
        Value::Object(_) => first_text(value, &["username", "name", "nickname", "displayName"]),
        other => to_text(Some(other)),
    }
}

/// Identity key for a player name, lowercase and trimmed.
pub fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Integer interpretation of an id, only if it is a whole number.
pub fn as_integer(value: Option<&Value>) -> Option<i64> {
    match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0 && f.is_finite()).map(|f| f as i64)),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit()) {
                trimmed.parse().ok()
            } else {
                None
            }
        }
        _ => None,
    }
}
