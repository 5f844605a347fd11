use crate::Result;
use serde_json::Value;

pub trait RawSource {
    fn source_name(&self) -> &'static str;
    fn location(&self) -> String;
    fn fetch_json(&self) -> Result<Value>;
}
