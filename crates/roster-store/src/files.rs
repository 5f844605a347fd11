use crate::error::{Result, StoreError};
use crate::paths;
use roster_core::domain::RawUser;
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

pub fn read_json(path: &Path) -> Result<Value> {
    let contents = fs::read_to_string(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            StoreError::MissingInput(path.to_path_buf())
        } else {
            StoreError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    serde_json::from_str(&contents).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn read_raw_users(path: &Path) -> Result<Vec<RawUser>> {
    match read_json(path)? {
        Value::Array(items) => Ok(items.into_iter().map(RawUser::from).collect()),
        _ => Err(StoreError::NotAnArray(path.to_path_buf())),
    }
}

/// Writes `value` as indented UTF-8 JSON, creating parent directories first.
/// Returns the number of bytes written.
///
/// The file is written in place; an interrupted write can leave it truncated.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<u64> {
    let data = serde_json::to_vec_pretty(value)?;
    paths::ensure_parent_dir(path)?;
    fs::write(path, &data).map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(data.len() as u64)
}
