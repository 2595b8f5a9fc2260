//! Value Objects - Immutable, identity-less domain primitives

mod coordinates;
mod difficulty;
mod query;
mod timestamp;
mod video_id;

pub use coordinates::Coordinates;
pub use difficulty::{DifficultyBand, DifficultyRating};
pub use query::Query;
pub use timestamp::format_timestamp;
pub use video_id::VideoId;
