pub mod domain;
pub mod dto;
pub mod error;
pub mod rules;

pub use domain::*;
pub use dto::*;
pub use error::{CoreError, RecordError};
pub use rules::*;
