//! Operator identity resolution.
//!
//! Operators show up as plain strings, as nested objects with one of several
//! name keys, or not at all. Resolution never invents a name: if nothing
//! yields text the result is the empty string.

use serde_json::Value;

/// Keys probed on an operator object, first non-empty wins.
pub const OPERATOR_OBJECT_KEYS: &[&str] =
    &["name", "operatorName", "operator", "label", "value", "slug"];

/// Operator fields of a player entry, in priority order.
pub const PLAYER_OPERATOR_KEYS: &[&str] = &[
    "operator",
    "operatorName",
    "operator_name",
    "operatorData",
    "operator_data",
];

pub const KILLER_OPERATOR_KEYS: &[&str] = &[
    "attackerOperator",
    "killerOperator",
    "attacker_operator",
    "killer_operator",
];

pub const VICTIM_OPERATOR_KEYS: &[&str] = &["victimOperator", "victim_operator"];

/// Additional spellings found in legacy kill events.
pub const LEGACY_KILLER_OPERATOR_KEYS: &[&str] = &[
    "killerOperator",
    "attackerOperator",
    "killer_operator",
    "attacker_operator",
    "killerOperatorName",
];

pub const LEGACY_VICTIM_OPERATOR_KEYS: &[&str] =
    &["victimOperator", "victim_operator", "victimOperatorName"];

pub fn extract_operator_name(raw: Option<&Value>) -> String {
    match raw {
        Some(Value::String(s)) => s.trim().to_owned(),
        Some(object @ Value::Object(_)) => OPERATOR_OBJECT_KEYS
            .iter()
            .filter_map(|key| match object.get(key) {
                Some(Value::String(s)) => Some(s.trim()),
                _ => None,
            })
            .find(|name| !name.is_empty())
            .map(str::to_owned)
            .unwrap_or_default(),
        _ => String::new(),
    }
}

/// The first of `keys` on `object` that resolves to an operator name.
pub fn operator_from_keys(object: &Value, keys: &[&str]) -> String {
    keys.iter()
        .map(|key| extract_operator_name(object.get(key)))
        .find(|name| !name.is_empty())
        .unwrap_or_default()
}

/// Operator of a roster entry.
pub fn player_operator(player: &Value) -> String {
    operator_from_keys(player, PLAYER_OPERATOR_KEYS)
}
