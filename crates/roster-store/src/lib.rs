pub mod error;
pub mod files;
pub mod paths;

pub use error::{Result, StoreError, StoreErrorKind};
pub use files::{read_json, read_raw_users, write_json};
