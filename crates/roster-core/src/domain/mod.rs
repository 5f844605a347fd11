pub mod coords;
pub mod email;
pub mod ids;
pub mod raw;
pub mod record;
pub mod text;

pub use coords::parse_coordinate;
pub use email::normalize_email;
pub use ids::{coerce_user_id, UserId};
pub use raw::{RawUser, Section};
pub use record::CleanRecord;
pub use text::{stripped, stripped_str};
