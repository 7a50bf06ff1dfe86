//! Sentinel encoding for the `movies.rating` column.
//!
//! The column is `REAL NOT NULL`, so "no rating" is stored as
//! [`SENTINEL_RATING`]. Valid ratings are never negative, so the sentinel
//! cannot collide with a real value. The constant stays inside this crate;
//! callers only ever see `Option<Rating>`.

use moviecat_core::rating::Rating;

/// Stored value meaning "this movie has no rating".
pub const SENTINEL_RATING: f32 = -1.0;

/// Map an optional rating to its column value.
pub fn encode(rating: Option<Rating>) -> f32 {
    rating.map_or(SENTINEL_RATING, Rating::value)
}

/// Map a column value back to an optional rating.
///
/// Compares exactly against the sentinel: no valid input path ever stores a
/// value near it.
#[allow(clippy::float_cmp)]
pub fn decode(stored: f32) -> Option<Rating> {
    if stored == SENTINEL_RATING {
        None
    } else {
        Some(Rating::from_stored(stored))
    }
}
