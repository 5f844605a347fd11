use crate::error::{Result, StoreError};
use std::fs;
use std::path::Path;

pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if path.file_name().is_none() {
        return Err(StoreError::InvalidPath(path.to_path_buf()));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|source| StoreError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    Ok(())
}
