use serde_json::Value;

/// Trimmed text of a scalar value, or `None` when the value is absent or trims
/// to nothing. Numbers and booleans are rendered as their JSON text first;
/// arrays and objects have no scalar text.
pub fn stripped(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(text) => stripped_str(text),
        Value::Number(number) => stripped_str(&number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

pub fn stripped_str(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}
