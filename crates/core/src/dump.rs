use serde::Serialize;

/// Serialize any serializable value to a pretty-printed JSON string.
pub fn to_pretty_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}
