use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("id missing for record {}", record_label(.name))]
    MissingId { name: Option<String> },
    #[error("id {value} for record {} is not an integer", record_label(.name))]
    InvalidId { name: Option<String>, value: String },
}

/// A [`CoreError`] tied to the position of the offending record in its batch.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("record {index}: {source}")]
pub struct RecordError {
    pub index: usize,
    #[source]
    pub source: CoreError,
}

fn record_label(name: &Option<String>) -> &str {
    name.as_deref().unwrap_or("<unnamed>")
}
