use crate::domain::text::stripped;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One untrusted user object as delivered by the source API.
///
/// Nothing about the shape is guaranteed: keys may be missing, null, or hold a
/// value of the wrong type. All access goes through [`RawUser::field`] and
/// [`RawUser::section`], which never fail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawUser(pub Value);

impl RawUser {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Value stored under `key`. Explicit nulls read as absent.
    pub fn field(&self, key: &str) -> Option<&Value> {
        non_null_field(&self.0, key)
    }

    /// Nested mapping stored under `key`, or an empty section when the key is
    /// absent, null, or holds something other than an object.
    pub fn section(&self, key: &str) -> Section<'_> {
        Section::of(self.field(key))
    }

    /// Trimmed `name`, used to identify the record in error messages.
    pub fn display_name(&self) -> Option<String> {
        stripped(self.field("name"))
    }
}

impl From<Value> for RawUser {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Section<'a>(Option<&'a Value>);

impl<'a> Section<'a> {
    fn of(value: Option<&'a Value>) -> Self {
        Self(value.filter(|value| value.is_object()))
    }

    pub fn field(&self, key: &str) -> Option<&'a Value> {
        self.0.and_then(|value| non_null_field(value, key))
    }

    pub fn section(&self, key: &str) -> Section<'a> {
        Section::of(self.field(key))
    }
}

fn non_null_field<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.get(key).filter(|value| !value.is_null())
}
