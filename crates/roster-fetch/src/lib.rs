pub mod error;
pub mod fetch;
pub mod http;
pub mod source;

pub use error::{FetchError, Result};
pub use fetch::{fetch, fetch_to, Fetched};
pub use http::HttpSource;
pub use source::RawSource;
