use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("input file not found: {0}")]
    MissingInput(PathBuf),
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid json in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("expected a json array of users in {0}")]
    NotAnArray(PathBuf),
    #[error("json encode error: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("invalid output path: {0}")]
    InvalidPath(PathBuf),
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    MissingInput,
    Io,
    Parse,
    NotAnArray,
    Encode,
    InvalidPath,
}

impl StoreError {
    pub fn kind(&self) -> StoreErrorKind {
        match self {
            StoreError::MissingInput(_) => StoreErrorKind::MissingInput,
            StoreError::Read { .. } | StoreError::Write { .. } => StoreErrorKind::Io,
            StoreError::Parse { .. } => StoreErrorKind::Parse,
            StoreError::NotAnArray(_) => StoreErrorKind::NotAnArray,
            StoreError::Encode(_) => StoreErrorKind::Encode,
            StoreError::InvalidPath(_) => StoreErrorKind::InvalidPath,
        }
    }
}
