use crate::http::HttpSource;
use crate::source::RawSource;
use crate::Result;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetched {
    pub path: PathBuf,
    pub entries: Option<usize>,
    pub size_bytes: u64,
}

pub fn fetch(url: &str, destination: &Path) -> Result<Fetched> {
    fetch_to(&HttpSource::new(url), destination)
}

/// Persists the payload of `source` verbatim at `destination`. Nothing is
/// written when the source fails.
pub fn fetch_to(source: &dyn RawSource, destination: &Path) -> Result<Fetched> {
    let payload = source.fetch_json()?;
    let size_bytes = roster_store::write_json(destination, &payload)?;
    debug!(
        source = source.source_name(),
        location = %source.location(),
        path = %destination.display(),
        size_bytes,
        "raw payload written"
    );
    Ok(Fetched {
        path: destination.to_path_buf(),
        entries: payload.as_array().map(Vec::len),
        size_bytes,
    })
}
