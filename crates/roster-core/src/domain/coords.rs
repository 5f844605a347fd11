use serde_json::Value;

/// Latitude or longitude as a finite float. No range check is applied, and
/// booleans are treated as unparsable rather than as 0.0 or 1.0.
pub fn parse_coordinate(value: Option<&Value>) -> Option<f64> {
    let parsed = match value? {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    }?;
    parsed.is_finite().then_some(parsed)
}
