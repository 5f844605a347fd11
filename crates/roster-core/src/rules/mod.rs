pub mod normalize;

pub use normalize::{normalize, normalize_each, normalize_user, split_results};
