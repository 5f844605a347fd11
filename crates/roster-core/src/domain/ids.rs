use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

// i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
const F64_ID_UPPER: f64 = 9_223_372_036_854_775_808.0;

/// Integer id from a raw value: integers as-is, floats truncated toward zero,
/// strings parsed as base-10 integers after trimming. Booleans are rejected
/// rather than read as 0 or 1.
pub fn coerce_user_id(value: &Value) -> Option<UserId> {
    match value {
        Value::Number(number) => {
            if let Some(id) = number.as_i64() {
                return Some(UserId(id));
            }
            if number.is_u64() {
                return None;
            }
            let truncated = number.as_f64()?.trunc();
            if truncated.is_finite() && truncated >= -F64_ID_UPPER && truncated < F64_ID_UPPER {
                Some(UserId(truncated as i64))
            } else {
                None
            }
        }
        Value::String(text) => text.parse().ok(),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    }
}
